#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{PathItemType, RefOr, schema::Schema};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        let components = openapi.components.as_ref().unwrap();
        for name in [
            "ErrorResponse",
            "HealthResponse",
            "FarmerDto",
            "FarmlandDto",
            "CreateFarmerRequest",
            "CreateFarmlandRequest",
        ] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for field in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_farmer_schema_structure() {
        let properties = object_properties("FarmerDto");
        for field in ["nic", "name", "phone", "address"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_lookup_path_is_documented() {
        let openapi = ApiDoc::openapi();

        let lookup = openapi.paths.paths.get("/farmer/{nic}").expect("lookup path");
        let get = lookup.operations.get(&PathItemType::Get).expect("GET operation");
        assert!(get.responses.responses.contains_key("200"));
        assert!(get.responses.responses.contains_key("404"));
    }

    #[test]
    fn test_farmer_and_farmland_paths_are_documented() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        let farmers = paths.get("/api/v1/farmers").expect("farmers path");
        assert!(farmers.operations.contains_key(&PathItemType::Get));
        assert!(farmers.operations.contains_key(&PathItemType::Post));

        let farmer = paths.get("/api/v1/farmers/{nic}").expect("farmer path");
        assert!(farmer.operations.contains_key(&PathItemType::Delete));

        assert!(paths.contains_key("/api/v1/farmers/{nic}/farmlands"));
        assert!(paths.contains_key("/api/v1/farmlands"));
        assert!(paths.contains_key("/api/v1/farmlands/{id}"));
        assert!(paths.contains_key("/health"));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("ErrorResponse"));
    }
}
