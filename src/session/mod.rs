pub(crate) mod fill_session;
