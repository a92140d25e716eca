mod remembered_email_store;
