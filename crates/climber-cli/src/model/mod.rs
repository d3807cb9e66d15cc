pub(crate) mod search_record;
