//! Fixed shop catalog.
//!
//! DESIGN
//! ======
//! The catalog is a process-wide constant slice. Records borrow only
//! `'static` data, so filtering hands out references and never clones.
//! Nothing mutates it after startup.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A single cafe listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ShopRecord {
    pub id: &'static str,
    pub name: &'static str,
    /// Rating in `[0, 5]`, one decimal place.
    pub rating: f32,
    pub distance_km: f32,
    pub address: &'static str,
    /// Externally hosted image URL, rendered as-is.
    pub image: &'static str,
    pub pet_policy: &'static str,
    pub tags: &'static [&'static str],
}

impl ShopRecord {
    /// Rating with one decimal and a star glyph, e.g. `"4.8 ★"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1} ★", self.rating)
    }

    /// Distance and street address, e.g. `"0.9 km • 45 Willow Ave"`.
    #[must_use]
    pub fn location_label(&self) -> String {
        format!("{} km • {}", self.distance_km, self.address)
    }
}

/// All listed shops, in display order.
pub const SHOPS: &[ShopRecord] = &[
    ShopRecord {
        id: "a1",
        name: "The Purr & Pour",
        rating: 4.8,
        distance_km: 0.9,
        address: "45 Willow Ave",
        image: "https://images.unsplash.com/photo-1551024709-8f23befb58d3?q=80&w=1200&auto=format&fit=crop",
        pet_policy: "Dogs and cats welcome indoors",
        tags: &["cozy", "outdoor seating"],
    },
    ShopRecord {
        id: "a2",
        name: "Bark & Brew",
        rating: 4.6,
        distance_km: 1.4,
        address: "12 Maple St",
        image: "https://images.unsplash.com/photo-1526312426768-1a66a3f2e8d9?q=80&w=1200&auto=format&fit=crop",
        pet_policy: "Leashed pets allowed on patio",
        tags: &["dog-friendly", "latte art"],
    },
    ShopRecord {
        id: "a3",
        name: "Pawsitive Cafe",
        rating: 4.7,
        distance_km: 2.1,
        address: "3 Ocean Dr",
        image: "https://images.unsplash.com/photo-1498654896293-37aacf113fd9?q=80&w=1200&auto=format&fit=crop",
        pet_policy: "Pets welcome throughout",
        tags: &["wifi", "bakery"],
    },
    ShopRecord {
        id: "a4",
        name: "Whiskers & Whisk",
        rating: 4.5,
        distance_km: 0.6,
        address: "88 Cedar Ln",
        image: "https://images.unsplash.com/photo-1519682576866-ae5a0cbeb5f8?q=80&w=1200&auto=format&fit=crop",
        pet_policy: "Pet-friendly indoors",
        tags: &["quiet", "snacks"],
    },
    ShopRecord {
        id: "a5",
        name: "Cup & Collar",
        rating: 4.4,
        distance_km: 3.2,
        address: "22 Parkside",
        image: "https://images.unsplash.com/photo-1495474528270-9df3f48b1186?q=80&w=1200&auto=format&fit=crop",
        pet_policy: "Outdoor seating only with pets",
        tags: &["drip", "bakery"],
    },
    ShopRecord {
        id: "a6",
        name: "Furry Beans",
        rating: 4.9,
        distance_km: 2.5,
        address: "9 Harbor St",
        image: "https://images.unsplash.com/photo-1498654604358-1d2b4c9a9c3c?q=80&w=1200&auto=format&fit=crop",
        pet_policy: "All pets welcome with leash",
        tags: &["rooftop", "lattes"],
    },
];

