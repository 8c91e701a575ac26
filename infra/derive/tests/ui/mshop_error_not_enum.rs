use mshop_derive::mshop_error;

#[mshop_error]
pub struct DemoError {
    message: String,
}

fn main() {}
