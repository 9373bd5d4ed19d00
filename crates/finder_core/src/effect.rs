#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubmitQuery {
        request: crate::RequestId,
        message: String,
    },
}
