pub type CmdResult<T> = cpp_disable::Result<(T, i32)>;

pub mod disable;
