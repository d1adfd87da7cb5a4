use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn failed(message: impl Into<String>) -> Self {
        ErrorResponse {
            status: "failed".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: String,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn success(data: T) -> Self {
        DataResponse {
            status: "success".to_string(),
            data,
        }
    }
}
