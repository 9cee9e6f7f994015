/// 命令执行结果
///
/// 目标记录不存在是可预期的结果，调用方据此提示或重定向，不作为错误处理。
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T = ()> {
    Done(T),
    NotFound,
}

impl From<bool> for Outcome {
    fn from(matched: bool) -> Self {
        if matched {
            Outcome::Done(())
        } else {
            Outcome::NotFound
        }
    }
}
