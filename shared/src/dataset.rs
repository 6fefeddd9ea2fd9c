//! Static seed data for the marketplace
//!
//! The catalog is fixed at build time: thirty states, a dozen sellers, three
//! workshops, a dozen jewelry pieces plus the dashboard fixtures. It is built
//! once on first access and never mutated afterwards.

use chrono::NaiveDate;
use std::sync::LazyLock;

use crate::filters::PriceRange;
use crate::types::{
    DashboardCategory, Inquiry, InquiryPriority, InquiryStatus, JewelryCategory, JewelryItem,
    PriceBounds, Seller, StateData, SubCategory, Workshop,
};

static SEED: LazyLock<Dataset> = LazyLock::new(Dataset::build_seed);

/// Every record the marketplace can serve
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub states: Vec<StateData>,
    pub sellers: Vec<Seller>,
    pub workshops: Vec<Workshop>,
    pub jewelry: Vec<JewelryItem>,
    pub inquiries: Vec<Inquiry>,
    pub dashboard_categories: Vec<DashboardCategory>,
}

impl Dataset {
    /// Shared, lazily built seed dataset
    pub fn seed() -> &'static Dataset {
        &SEED
    }

    /// Build a fresh copy of the seed data
    pub fn build_seed() -> Dataset {
        Dataset {
            states: seed_states(),
            sellers: seed_sellers(),
            workshops: seed_workshops(),
            jewelry: seed_jewelry(),
            inquiries: seed_inquiries(),
            dashboard_categories: seed_dashboard_categories(),
        }
    }

    /// Catalog price extremes, `None` for an empty catalog
    pub fn price_bounds(&self) -> Option<PriceBounds> {
        PriceRange::spanning(&self.jewelry).map(PriceBounds::from)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn state(id: &str, name: &str, seller_count: u32, path_d: &str) -> StateData {
    StateData {
        id: id.to_string(),
        name: name.to_string(),
        seller_count,
        path_d: path_d.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn seed_states() -> Vec<StateData> {
    vec![
        state("MH", "Maharashtra", 8, "M180,280 L220,260 L260,280 L280,320 L260,360 L220,380 L180,360 L160,320 Z"),
        state("GJ", "Gujarat", 6, "M100,240 L140,220 L180,240 L180,280 L160,320 L120,320 L80,300 L80,260 Z"),
        state("RJ", "Rajasthan", 7, "M120,140 L180,120 L240,140 L260,200 L220,260 L140,260 L100,220 L100,180 Z"),
        state("KA", "Karnataka", 5, "M200,380 L240,360 L280,380 L280,440 L240,480 L200,460 L180,420 Z"),
        state("TN", "Tamil Nadu", 6, "M240,480 L280,460 L320,480 L320,540 L280,560 L240,540 L220,520 Z"),
        state("KL", "Kerala", 4, "M200,480 L220,460 L240,480 L240,540 L220,560 L200,540 L190,520 Z"),
        state("AP", "Andhra Pradesh", 5, "M260,360 L320,340 L360,380 L340,440 L280,460 L240,420 Z"),
        state("TS", "Telangana", 4, "M260,300 L320,280 L360,320 L340,360 L280,360 L260,340 Z"),
        state("WB", "West Bengal", 5, "M380,200 L420,180 L440,220 L420,280 L380,300 L360,260 L360,220 Z"),
        state("UP", "Uttar Pradesh", 6, "M260,140 L340,120 L380,160 L380,220 L320,260 L260,240 L240,200 Z"),
        state("MP", "Madhya Pradesh", 4, "M200,220 L280,200 L340,220 L340,280 L280,320 L220,300 L200,260 Z"),
        state("BR", "Bihar", 3, "M360,180 L400,160 L420,200 L400,240 L360,240 L340,220 Z"),
        state("OR", "Odisha", 4, "M340,280 L400,260 L420,320 L380,360 L320,360 L300,320 Z"),
        state("PB", "Punjab", 4, "M180,80 L220,60 L260,80 L260,120 L220,140 L180,120 L160,100 Z"),
        state("HR", "Haryana", 3, "M200,120 L240,100 L280,120 L280,160 L240,180 L200,160 L180,140 Z"),
        state("DL", "Delhi", 5, "M240,140 L260,130 L280,140 L280,160 L260,170 L240,160 Z"),
        state("JH", "Jharkhand", 3, "M380,240 L420,220 L440,260 L420,300 L380,300 L360,280 Z"),
        state("CG", "Chhattisgarh", 2, "M320,280 L360,260 L400,300 L380,360 L320,360 L300,320 Z"),
        state("AS", "Assam", 3, "M440,140 L500,120 L540,160 L520,200 L460,200 L440,180 Z"),
        state("JK", "Jammu & Kashmir", 2, "M160,20 L220,10 L260,40 L260,80 L200,100 L160,80 L140,50 Z"),
        state("UK", "Uttarakhand", 2, "M260,80 L300,60 L340,80 L340,120 L300,140 L260,120 L240,100 Z"),
        state("HP", "Himachal Pradesh", 2, "M220,40 L260,30 L300,50 L300,80 L260,100 L220,80 L200,60 Z"),
        state("GA", "Goa", 2, "M180,400 L200,390 L210,410 L200,430 L180,420 Z"),
        state("NL", "Nagaland", 1, "M500,160 L530,150 L550,180 L530,200 L500,190 Z"),
        state("MN", "Manipur", 1, "M500,200 L530,190 L550,220 L530,250 L500,240 Z"),
        state("MZ", "Mizoram", 1, "M480,250 L510,240 L530,280 L510,300 L480,290 Z"),
        state("TR", "Tripura", 1, "M460,250 L490,240 L500,270 L480,290 L460,280 Z"),
        state("ML", "Meghalaya", 1, "M460,200 L500,190 L520,210 L500,230 L460,220 Z"),
        state("SK", "Sikkim", 1, "M400,140 L420,130 L430,150 L420,170 L400,160 Z"),
        state("AR", "Arunachal Pradesh", 1, "M480,100 L540,80 L580,120 L560,160 L500,160 L480,140 Z"),
    ]
}

fn seed_sellers() -> Vec<Seller> {
    vec![
        Seller {
            id: "s1".to_string(),
            name: "Rajesh Zaveri".to_string(),
            workshop_name: "Zaveri & Sons".to_string(),
            state: "MH".to_string(),
            city: "Mumbai".to_string(),
            address: "23, Zaveri Bazaar, Kalbadevi Road".to_string(),
            phone: "+91 22 2342 5678".to_string(),
            email: "contact@zaverisonsj.com".to_string(),
            whatsapp: "+91 98765 43210".to_string(),
            rating: 4.9,
            review_count: 342,
            specialties: strings(&["Traditional", "Bridal", "Kundan"]),
            thumbnail_image: "https://images.unsplash.com/photo-1617038260897-41a1f14a8ca0?w=600&h=400&fit=crop".to_string(),
            years_in_business: 75,
            verified: true,
        },
        Seller {
            id: "s2".to_string(),
            name: "Priya Jewellers".to_string(),
            workshop_name: "Priya Heritage Jewels".to_string(),
            state: "MH".to_string(),
            city: "Pune".to_string(),
            address: "45, MG Road, Camp Area".to_string(),
            phone: "+91 20 2567 8901".to_string(),
            email: "info@priyajewels.com".to_string(),
            whatsapp: "+91 98234 56789".to_string(),
            rating: 4.7,
            review_count: 189,
            specialties: strings(&["Contemporary", "Diamond", "Platinum"]),
            thumbnail_image: "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=600&h=400&fit=crop".to_string(),
            years_in_business: 25,
            verified: true,
        },
        Seller {
            id: "s3".to_string(),
            name: "Kantilal Chhotalal".to_string(),
            workshop_name: "KC Jewellers".to_string(),
            state: "GJ".to_string(),
            city: "Ahmedabad".to_string(),
            address: "12, Manek Chowk, Relief Road".to_string(),
            phone: "+91 79 2550 1234".to_string(),
            email: "sales@kcjewellers.in".to_string(),
            whatsapp: "+91 99786 54321".to_string(),
            rating: 4.8,
            review_count: 256,
            specialties: strings(&["Antique", "Jadau", "Meenakari"]),
            thumbnail_image: "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=600&h=400&fit=crop".to_string(),
            years_in_business: 90,
            verified: true,
        },
        Seller {
            id: "s4".to_string(),
            name: "Tribhovandas Bhimji".to_string(),
            workshop_name: "TBZ Creations".to_string(),
            state: "GJ".to_string(),
            city: "Surat".to_string(),
            address: "78, Ring Road, Diamond Market".to_string(),
            phone: "+91 261 234 5678".to_string(),
            email: "tbz@tbzcreations.com".to_string(),
            whatsapp: "+91 98250 12345".to_string(),
            rating: 4.9,
            review_count: 421,
            specialties: strings(&["Diamond", "Solitaire", "Modern"]),
            thumbnail_image: "https://images.unsplash.com/photo-1573408301185-9146fe634ad0?w=600&h=400&fit=crop".to_string(),
            years_in_business: 45,
            verified: true,
        },
        Seller {
            id: "s5".to_string(),
            name: "Tanishq Heritage".to_string(),
            workshop_name: "Tanishq Workshop".to_string(),
            state: "KA".to_string(),
            city: "Bangalore".to_string(),
            address: "101, Commercial Street".to_string(),
            phone: "+91 80 2555 6789".to_string(),
            email: "heritage@tanishq.co.in".to_string(),
            whatsapp: "+91 97438 67890".to_string(),
            rating: 4.8,
            review_count: 512,
            specialties: strings(&["Bridal", "Temple", "Gold"]),
            thumbnail_image: "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=600&h=400&fit=crop".to_string(),
            years_in_business: 30,
            verified: true,
        },
        Seller {
            id: "s6".to_string(),
            name: "Jaipur Gems".to_string(),
            workshop_name: "Royal Jaipur Jewellers".to_string(),
            state: "RJ".to_string(),
            city: "Jaipur".to_string(),
            address: "56, Johari Bazaar, Pink City".to_string(),
            phone: "+91 141 256 7890".to_string(),
            email: "royal@jaipurgems.com".to_string(),
            whatsapp: "+91 94140 56789".to_string(),
            rating: 4.9,
            review_count: 378,
            specialties: strings(&["Polki", "Kundan", "Gemstone"]),
            thumbnail_image: "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=600&h=400&fit=crop".to_string(),
            years_in_business: 120,
            verified: true,
        },
        Seller {
            id: "s7".to_string(),
            name: "Senco Gold".to_string(),
            workshop_name: "Senco Artisan Studio".to_string(),
            state: "WB".to_string(),
            city: "Kolkata".to_string(),
            address: "34, Park Street".to_string(),
            phone: "+91 33 2229 0123".to_string(),
            email: "studio@sencogold.com".to_string(),
            whatsapp: "+91 98307 89012".to_string(),
            rating: 4.7,
            review_count: 298,
            specialties: strings(&["Bengali", "Filigree", "Nakshi"]),
            thumbnail_image: "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=600&h=400&fit=crop".to_string(),
            years_in_business: 85,
            verified: true,
        },
        Seller {
            id: "s8".to_string(),
            name: "GRT Jewellers".to_string(),
            workshop_name: "GRT Temple Collection".to_string(),
            state: "TN".to_string(),
            city: "Chennai".to_string(),
            address: "89, T Nagar, Pondy Bazaar".to_string(),
            phone: "+91 44 2434 5678".to_string(),
            email: "temple@grtjewellers.com".to_string(),
            whatsapp: "+91 98410 34567".to_string(),
            rating: 4.8,
            review_count: 445,
            specialties: strings(&["Temple", "Antique", "South Indian"]),
            thumbnail_image: "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=600&h=400&fit=crop".to_string(),
            years_in_business: 55,
            verified: true,
        },
        Seller {
            id: "s9".to_string(),
            name: "Kalyan Jewellers".to_string(),
            workshop_name: "Kalyan Artisans".to_string(),
            state: "KL".to_string(),
            city: "Thrissur".to_string(),
            address: "12, Swaraj Round".to_string(),
            phone: "+91 487 242 3456".to_string(),
            email: "artisans@kalyanjewellers.net".to_string(),
            whatsapp: "+91 94470 23456".to_string(),
            rating: 4.9,
            review_count: 567,
            specialties: strings(&["Kerala", "Traditional", "Bridal"]),
            thumbnail_image: "https://images.unsplash.com/photo-1610375461246-83df859d849d?w=600&h=400&fit=crop".to_string(),
            years_in_business: 70,
            verified: true,
        },
        Seller {
            id: "s10".to_string(),
            name: "PC Chandra".to_string(),
            workshop_name: "PC Chandra Heritage".to_string(),
            state: "WB".to_string(),
            city: "Kolkata".to_string(),
            address: "67, Bowbazar Street".to_string(),
            phone: "+91 33 2236 7890".to_string(),
            email: "heritage@pcchandra.com".to_string(),
            whatsapp: "+91 98300 67890".to_string(),
            rating: 4.6,
            review_count: 234,
            specialties: strings(&["Traditional", "Wedding", "Gold"]),
            thumbnail_image: "https://images.unsplash.com/photo-1601121141461-9d6647bca1ed?w=600&h=400&fit=crop".to_string(),
            years_in_business: 100,
            verified: true,
        },
        Seller {
            id: "s11".to_string(),
            name: "Mangatrai Neeraj".to_string(),
            workshop_name: "Mangatrai Pearls".to_string(),
            state: "TS".to_string(),
            city: "Hyderabad".to_string(),
            address: "23, Basheerbagh".to_string(),
            phone: "+91 40 2323 4567".to_string(),
            email: "pearls@mangatrai.com".to_string(),
            whatsapp: "+91 99897 12345".to_string(),
            rating: 4.8,
            review_count: 312,
            specialties: strings(&["Pearl", "Nizami", "Antique"]),
            thumbnail_image: "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=600&h=400&fit=crop".to_string(),
            years_in_business: 80,
            verified: true,
        },
        Seller {
            id: "s12".to_string(),
            name: "Bhima Jewellers".to_string(),
            workshop_name: "Bhima Gold House".to_string(),
            state: "KL".to_string(),
            city: "Kochi".to_string(),
            address: "45, MG Road, Ernakulam".to_string(),
            phone: "+91 484 235 6789".to_string(),
            email: "goldhouse@bhima.in".to_string(),
            whatsapp: "+91 94470 56789".to_string(),
            rating: 4.7,
            review_count: 389,
            specialties: strings(&["Gold", "Diamond", "Platinum"]),
            thumbnail_image: "https://images.unsplash.com/photo-1586878341523-7c198bb6e81c?w=600&h=400&fit=crop".to_string(),
            years_in_business: 95,
            verified: true,
        },
    ]
}

fn seed_workshops() -> Vec<Workshop> {
    vec![
        Workshop {
            id: "w1".to_string(),
            seller_id: "s1".to_string(),
            name: "Zaveri & Sons Master Workshop".to_string(),
            tagline: "Crafting Dreams in Gold Since 1948".to_string(),
            description: "Established in 1948, Zaveri & Sons has been the cornerstone of Mumbai's legendary Zaveri Bazaar. Our workshop combines traditional craftsmanship passed down through four generations with modern precision techniques. Each piece that leaves our workshop carries the legacy of master artisans who have dedicated their lives to the art of jewelry making. We specialize in bridal collections, Kundan work, and bespoke designs that tell your unique story.".to_string(),
            hero_image: "https://images.unsplash.com/photo-1617038260897-41a1f14a8ca0?w=1400&h=700&fit=crop".to_string(),
            gallery_images: strings(&[
                "https://images.unsplash.com/photo-1599643477877-530eb83abc8e?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1573408301185-9146fe634ad0?w=400&h=400&fit=crop",
            ]),
            established_year: 1948,
            team_size: 35,
            certifications: strings(&["BIS Hallmark", "IGI Certified", "GIA Partner"]),
            specialties: strings(&["Traditional", "Bridal", "Kundan", "Custom Design"]),
        },
        Workshop {
            id: "w2".to_string(),
            seller_id: "s3".to_string(),
            name: "KC Jewellers Heritage Atelier".to_string(),
            tagline: "Where Tradition Meets Timeless Elegance".to_string(),
            description: "KC Jewellers has been a trusted name in Ahmedabad's jewelry landscape for over 90 years. Our heritage atelier is home to some of Gujarat's most skilled artisans, specializing in intricate Jadau and Meenakari work. We take pride in preserving the ancient art forms while creating pieces that resonate with modern sensibilities. Every creation is a testament to our commitment to excellence and the rich cultural heritage of Indian jewelry.".to_string(),
            hero_image: "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=1400&h=700&fit=crop".to_string(),
            gallery_images: strings(&[
                "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1610375461246-83df859d849d?w=400&h=400&fit=crop",
            ]),
            established_year: 1933,
            team_size: 42,
            certifications: strings(&["BIS Hallmark", "GJEPC Member", "ISO 9001"]),
            specialties: strings(&["Antique", "Jadau", "Meenakari", "Heirloom"]),
        },
        Workshop {
            id: "w3".to_string(),
            seller_id: "s6".to_string(),
            name: "Royal Jaipur Jewellers Studio".to_string(),
            tagline: "The Pink City's Crown Jeweler".to_string(),
            description: "Nestled in the heart of Johari Bazaar, Royal Jaipur Jewellers continues a legacy spanning 120 years. Our studio is renowned worldwide for Polki and Kundan creations that have adorned royalty and celebrities alike. Each gemstone is hand-selected from the finest sources, and our master craftsmen employ techniques that have been perfected over centuries. We don't just create jewelry; we craft wearable art that tells stories of India's regal past.".to_string(),
            hero_image: "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=1400&h=700&fit=crop".to_string(),
            gallery_images: strings(&[
                "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1573408301185-9146fe634ad0?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1617038260897-41a1f14a8ca0?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=400&h=400&fit=crop",
            ]),
            established_year: 1903,
            team_size: 55,
            certifications: strings(&["GIA Certified", "BIS Hallmark", "Royal Warrant"]),
            specialties: strings(&["Polki", "Kundan", "Gemstone", "Royal Collection"]),
        },
    ]
}

fn seed_jewelry() -> Vec<JewelryItem> {
    vec![
        JewelryItem {
            id: "j1".to_string(),
            name: "Kundan Bridal Necklace".to_string(),
            category: JewelryCategory::Necklaces,
            price: 450000,
            material: "Gold 22K".to_string(),
            weight: "45g".to_string(),
            description: "Exquisite Kundan bridal necklace featuring intricate craftsmanship with uncut diamonds and precious gemstones. Perfect for the modern bride who values tradition.".to_string(),
            image_url: "https://images.unsplash.com/photo-1599643477877-530eb83abc8e?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j2".to_string(),
            name: "Diamond Solitaire Ring".to_string(),
            category: JewelryCategory::Rings,
            price: 285000,
            material: "Platinum".to_string(),
            weight: "8g".to_string(),
            description: "A stunning 1.5 carat diamond solitaire set in platinum. Certified by GIA for exceptional clarity and brilliance.".to_string(),
            image_url: "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j3".to_string(),
            name: "Temple Gold Earrings".to_string(),
            category: JewelryCategory::Earrings,
            price: 125000,
            material: "Gold 22K".to_string(),
            weight: "18g".to_string(),
            description: "Traditional South Indian temple jewelry earrings featuring Lakshmi motif with intricate granulation work.".to_string(),
            image_url: "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j4".to_string(),
            name: "Polki Choker Set".to_string(),
            category: JewelryCategory::Necklaces,
            price: 680000,
            material: "Gold 22K".to_string(),
            weight: "75g".to_string(),
            description: "Magnificent Polki choker set with matching earrings. Features uncut diamonds in traditional Rajasthani style.".to_string(),
            image_url: "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j5".to_string(),
            name: "Meenakari Bangles Set".to_string(),
            category: JewelryCategory::Bangles,
            price: 95000,
            material: "Gold 18K".to_string(),
            weight: "32g".to_string(),
            description: "Set of 4 exquisite Meenakari bangles with vibrant enamel work in traditional Rajasthani colors.".to_string(),
            image_url: "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j6".to_string(),
            name: "Pearl Drop Pendant".to_string(),
            category: JewelryCategory::Pendants,
            price: 45000,
            material: "Gold 18K".to_string(),
            weight: "6g".to_string(),
            description: "Elegant South Sea pearl pendant with diamond-studded bail. Perfect for both casual and formal occasions.".to_string(),
            image_url: "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j7".to_string(),
            name: "Ruby Tennis Bracelet".to_string(),
            category: JewelryCategory::Bracelets,
            price: 320000,
            material: "Gold 18K".to_string(),
            weight: "22g".to_string(),
            description: "Stunning tennis bracelet featuring Burmese rubies alternating with brilliant-cut diamonds.".to_string(),
            image_url: "https://images.unsplash.com/photo-1573408301185-9146fe634ad0?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j8".to_string(),
            name: "Antique Gold Jhumkas".to_string(),
            category: JewelryCategory::Earrings,
            price: 78000,
            material: "Gold 22K".to_string(),
            weight: "15g".to_string(),
            description: "Handcrafted antique gold jhumkas with delicate filigree work and tiny gold bells.".to_string(),
            image_url: "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j9".to_string(),
            name: "Diamond Cocktail Ring".to_string(),
            category: JewelryCategory::Rings,
            price: 195000,
            material: "Gold 18K".to_string(),
            weight: "12g".to_string(),
            description: "Bold cocktail ring featuring a cluster of diamonds in a modern geometric setting.".to_string(),
            image_url: "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j10".to_string(),
            name: "Jadau Wedding Set".to_string(),
            category: JewelryCategory::Necklaces,
            price: 850000,
            material: "Gold 22K".to_string(),
            weight: "120g".to_string(),
            description: "Complete Jadau wedding set including necklace, earrings, and maang tikka. A masterpiece of Mughal craftsmanship.".to_string(),
            image_url: "https://images.unsplash.com/photo-1617038260897-41a1f14a8ca0?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j11".to_string(),
            name: "Emerald Chandbali".to_string(),
            category: JewelryCategory::Earrings,
            price: 165000,
            material: "Gold 22K".to_string(),
            weight: "20g".to_string(),
            description: "Crescent-shaped chandbali earrings featuring Colombian emeralds and pearl drops.".to_string(),
            image_url: "https://images.unsplash.com/photo-1610375461246-83df859d849d?w=800&h=800&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
        JewelryItem {
            id: "j12".to_string(),
            name: "Filigree Gold Bangles".to_string(),
            category: JewelryCategory::Bangles,
            price: 145000,
            material: "Gold 22K".to_string(),
            weight: "28g".to_string(),
            description: "Pair of Bengali filigree bangles showcasing the delicate wire work technique of Kolkata artisans.".to_string(),
            image_url: "https://images.unsplash.com/photo-1601121141461-9d6647bca1ed?w=600&h=400&fit=crop".to_string(),
            model_3d_url: None,
            in_stock: true,
        },
    ]
}

fn seed_inquiries() -> Vec<Inquiry> {
    vec![
        Inquiry {
            id: "INQ-001".to_string(),
            customer: "Neha Kapoor".to_string(),
            product: "Kundan Bridal Necklace".to_string(),
            message: "Is this available in different colors? I need it for my wedding in March.".to_string(),
            status: InquiryStatus::Pending,
            date: date(2024, 1, 15),
            priority: InquiryPriority::High,
        },
        Inquiry {
            id: "INQ-002".to_string(),
            customer: "Arjun Malhotra".to_string(),
            product: "Diamond Solitaire Ring".to_string(),
            message: "Can you provide certification for the diamond? What's the clarity grade?".to_string(),
            status: InquiryStatus::Replied,
            date: date(2024, 1, 14),
            priority: InquiryPriority::Medium,
        },
        Inquiry {
            id: "INQ-003".to_string(),
            customer: "Sanya Gupta".to_string(),
            product: "Temple Gold Earrings".to_string(),
            message: "Do you ship to the USA? What are the shipping charges?".to_string(),
            status: InquiryStatus::Pending,
            date: date(2024, 1, 13),
            priority: InquiryPriority::Low,
        },
        Inquiry {
            id: "INQ-004".to_string(),
            customer: "Rohan Joshi".to_string(),
            product: "Polki Choker Set".to_string(),
            message: "Is customization available? I want to add some emeralds.".to_string(),
            status: InquiryStatus::Replied,
            date: date(2024, 1, 12),
            priority: InquiryPriority::High,
        },
    ]
}

fn seed_dashboard_categories() -> Vec<DashboardCategory> {
    vec![DashboardCategory {
        id: "c1".to_string(),
        name: "Necklaces".to_string(),
        description: "Beautiful necklaces in various designs".to_string(),
        images: strings(&[
            "https://images.unsplash.com/photo-1599643477877-530eb83abc8e?w=400&h=400&fit=crop",
        ]),
        sub_categories: vec![
            SubCategory {
                id: "sc1".to_string(),
                name: "Kundan Necklaces".to_string(),
                description: "Traditional Kundan work".to_string(),
            },
            SubCategory {
                id: "sc2".to_string(),
                name: "Pearl Necklaces".to_string(),
                description: "Elegant pearl designs".to_string(),
            },
        ],
    }]
}
