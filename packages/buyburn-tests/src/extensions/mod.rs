pub mod app_response_ext;
