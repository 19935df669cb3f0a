mod response;

pub use response::print_text_result;
