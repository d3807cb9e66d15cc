mod command;
mod model;
mod problem;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    command::run()
}
