use crate::http_handler::common::Car;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// The car listing endpoints answer with a bare JSON array.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct CarListResponse {
    cars: Vec<Car>,
}

impl SerdeJSONBodyHTTPResponseType for CarListResponse {}

impl CarListResponse {
    pub fn cars(&self) -> &[Car] { &self.cars }
    pub fn into_cars(self) -> Vec<Car> { self.cars }
}
