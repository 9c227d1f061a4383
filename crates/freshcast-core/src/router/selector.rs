//! Capability selection

use super::QueryType;
use serde::{Deserialize, Serialize};

/// Downstream capabilities to invoke for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub forecast_engine: bool,
    pub assistant: bool,
}

impl Capabilities {
    pub const FORECAST: Capabilities = Capabilities {
        forecast_engine: true,
        assistant: false,
    };

    pub const ASSISTANT: Capabilities = Capabilities {
        forecast_engine: false,
        assistant: true,
    };
}

/// Map a query type to the capabilities that answer it
pub fn select_capabilities(query_type: QueryType) -> Capabilities {
    match query_type {
        QueryType::ForecastDemand | QueryType::InventoryNeeds | QueryType::RawMaterials => {
            Capabilities::FORECAST
        }
        QueryType::BusinessAdvice | QueryType::SupplierInfo | QueryType::GeneralQuestion => {
            Capabilities::ASSISTANT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_selects_something() {
        for query_type in QueryType::ALL {
            let caps = select_capabilities(query_type);
            assert!(caps.forecast_engine || caps.assistant, "{}", query_type);
        }
    }

    #[test]
    fn test_data_types_use_forecast_engine() {
        assert_eq!(
            select_capabilities(QueryType::RawMaterials),
            Capabilities::FORECAST
        );
        assert_eq!(
            select_capabilities(QueryType::GeneralQuestion),
            Capabilities::ASSISTANT
        );
    }
}
