mod credentials;
mod records;
