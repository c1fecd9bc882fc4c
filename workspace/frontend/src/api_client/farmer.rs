use common::{FarmerDto, FarmlandDto};
use crate::api_client;
use crate::settings;

/// Everything the farmer home page shows for one NIC.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmerOverview {
    pub farmer: FarmerDto,
    pub cropped: Vec<FarmlandDto>,
    pub uncropped: Vec<FarmlandDto>,
}

/// Resolve a farmer profile through the service's root-level lookup route.
pub async fn lookup_farmer(nic: &str) -> Result<FarmerDto, String> {
    log::trace!("Looking up farmer with NIC: {}", nic);
    let url = settings::get_settings().farmer_lookup_url(nic);
    let result = api_client::get_bare::<FarmerDto>(&url).await;
    match &result {
        Ok(farmer) => log::info!("Resolved farmer {} to '{}'", nic, farmer.name),
        Err(e) => log::error!("Error fetching farmer name: {}", e),
    }
    result
}

/// Farmland owned by `nic`; `cropped` narrows to planted or bare plots.
pub async fn get_farmer_farmlands(nic: &str, cropped: Option<bool>) -> Result<Vec<FarmlandDto>, String> {
    let nic_segment = urlencoding::encode(nic);
    let endpoint = match cropped {
        Some(flag) => format!("/farmers/{}/farmlands?cropped={}", nic_segment, flag),
        None => format!("/farmers/{}/farmlands", nic_segment),
    };
    log::trace!("Fetching farmlands: {}", endpoint);
    let result = api_client::get::<Vec<FarmlandDto>>(&endpoint).await;
    match &result {
        Ok(lands) => log::info!("Fetched {} farmlands for {}", lands.len(), nic),
        Err(e) => log::error!("Failed to fetch farmlands for {}: {}", nic, e),
    }
    result
}

/// Profile plus land split. `None` when no NIC has been entered yet.
pub async fn load_farmer_overview(nic: String) -> Result<Option<FarmerOverview>, String> {
    if nic.is_empty() {
        log::debug!("No NIC set, skipping farmer overview");
        return Ok(None);
    }

    let farmer = lookup_farmer(&nic).await?;
    let cropped = get_farmer_farmlands(&nic, Some(true)).await?;
    let uncropped = get_farmer_farmlands(&nic, Some(false)).await?;

    Ok(Some(FarmerOverview {
        farmer,
        cropped,
        uncropped,
    }))
}
