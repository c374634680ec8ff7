use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, MultipartBodyHTTPRequestType, RequestError,
};
use crate::http_handler::http_response::car_image::CarImageResponse;

/// Uploads a vehicle photo as a multipart form. The image bytes are held in
/// memory; callers read the file themselves so this layer stays io-free.
#[derive(Debug)]
pub struct CarImageRequest {
    car_id: usize,
    file_name: String,
    data: Vec<u8>,
}

impl CarImageRequest {
    pub fn new(car_id: usize, file_name: &str, data: Vec<u8>) -> Result<Self, RequestError> {
        if data.is_empty() {
            return Err(RequestError::InvalidPayload(String::from(
                "Image upload requires a non-empty file",
            )));
        }
        Ok(Self { car_id, file_name: String::from(file_name), data })
    }
}

impl MultipartBodyHTTPRequestType for CarImageRequest {
    fn multipart_body(&self) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(self.data.clone())
            .file_name(self.file_name.clone());
        reqwest::multipart::Form::new().part("image", part)
    }
}

impl HTTPRequestType for CarImageRequest {
    type Response = CarImageResponse;
    fn endpoint(&self) -> String { format!("/cars/{}/images", self.car_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
