use mshop_derive::mshop_error;

#[mshop_error]
pub enum DemoError {
    #[error("Invalid code: {message}")]
    Validation { message: String, context: Option<String> },
}

fn main() {}
