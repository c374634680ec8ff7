use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::car_list::CarListResponse;

/// Optional filters accepted by the car listing endpoint. Unset fields are
/// left out of the query string entirely.
#[derive(Debug, Default, Clone)]
pub struct CarFilters {
    pub brand: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl CarFilters {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(brand) = &self.brand {
            query.push((String::from("brand"), brand.clone()));
        }
        if let Some(fuel_type) = &self.fuel_type {
            query.push((String::from("fuelType"), fuel_type.clone()));
        }
        if let Some(transmission) = &self.transmission {
            query.push((String::from("transmission"), transmission.clone()));
        }
        if let Some(min_price) = self.min_price {
            query.push((String::from("minPrice"), min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            query.push((String::from("maxPrice"), max_price.to_string()));
        }
        query
    }
}

#[derive(Debug, Default)]
pub struct CarListRequest {
    pub filters: CarFilters,
}

impl NoBodyHTTPRequestType for CarListRequest {}

impl HTTPRequestType for CarListRequest {
    type Response = CarListResponse;
    fn endpoint(&self) -> String { String::from("/cars") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(String, String)> { self.filters.to_query() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filters_produce_an_empty_query() {
        assert!(CarListRequest::default().query_params().is_empty());
    }

    #[test]
    fn set_filters_are_rendered_camel_case() {
        let req = CarListRequest {
            filters: CarFilters {
                fuel_type: Some(String::from("Petrol")),
                max_price: Some(120.0),
                ..CarFilters::default()
            },
        };
        assert_eq!(
            req.query_params(),
            vec![
                (String::from("fuelType"), String::from("Petrol")),
                (String::from("maxPrice"), String::from("120")),
            ]
        );
    }
}
