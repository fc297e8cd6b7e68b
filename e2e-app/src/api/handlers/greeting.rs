use crate::services::assembler;

pub async fn hello() -> &'static str {
    assembler::hello()
}
