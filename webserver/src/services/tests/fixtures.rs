//! Test fixtures for webserver service tests

use jewel_shared::{Dataset, JewelryCategory, JewelryItem, Seller, StateData, Workshop};

/// Create a test state with no outline
pub fn create_test_state_data(id: &str, name: &str) -> StateData {
    StateData {
        id: id.to_string(),
        name: name.to_string(),
        seller_count: 1,
        path_d: String::new(),
    }
}

/// Create a test seller located in `state`
pub fn create_test_seller(id: &str, state: &str, specialties: &[&str]) -> Seller {
    Seller {
        id: id.to_string(),
        name: format!("Seller {id}"),
        workshop_name: format!("Workshop {id}"),
        state: state.to_string(),
        city: "Test City".to_string(),
        address: "1 Test Road".to_string(),
        phone: "+91 00000 00000".to_string(),
        email: format!("{id}@example.com"),
        whatsapp: "+91 00000 00000".to_string(),
        rating: 4.5,
        review_count: 10,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        thumbnail_image: String::new(),
        years_in_business: 5,
        verified: false,
    }
}

/// Create a test workshop owned by `seller_id`
pub fn create_test_workshop(id: &str, seller_id: &str) -> Workshop {
    Workshop {
        id: id.to_string(),
        seller_id: seller_id.to_string(),
        name: format!("Workshop {id}"),
        tagline: String::new(),
        description: String::new(),
        hero_image: String::new(),
        gallery_images: Vec::new(),
        established_year: 2000,
        team_size: 3,
        certifications: Vec::new(),
        specialties: Vec::new(),
    }
}

/// Create a test catalog item
pub fn create_test_item(id: &str, category: JewelryCategory, price: u64) -> JewelryItem {
    JewelryItem {
        id: id.to_string(),
        name: format!("Item {id}"),
        category,
        price,
        material: "Silver 925".to_string(),
        weight: "1g".to_string(),
        description: String::new(),
        image_url: String::new(),
        model_3d_url: None,
        in_stock: true,
    }
}

/// Small hand-built dataset, independent of the seed data
pub fn create_test_dataset() -> Dataset {
    Dataset {
        states: vec![
            create_test_state_data("AA", "Alpha"),
            create_test_state_data("BB", "Beta"),
        ],
        sellers: vec![
            create_test_seller("x1", "AA", &["Gold"]),
            create_test_seller("x2", "BB", &["Silver"]),
            create_test_seller("x3", "AA", &["Silver", "Pearl"]),
        ],
        workshops: vec![
            create_test_workshop("wa", "x3"),
            create_test_workshop("wb", "x3"),
        ],
        jewelry: vec![
            create_test_item("i1", JewelryCategory::Rings, 100),
            create_test_item("i2", JewelryCategory::Bangles, 300),
            create_test_item("i3", JewelryCategory::Rings, 200),
        ],
        inquiries: Vec::new(),
        dashboard_categories: Vec::new(),
    }
}
