pub mod smtp_client;
