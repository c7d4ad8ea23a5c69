use birdfarm_shop::api::stub::StubApi;
use birdfarm_shop::domain::bird::{Bird, BirdKind};
use birdfarm_shop::domain::nest::Nest;
use birdfarm_shop::domain::rating::Rating;
use birdfarm_shop::domain::specie::Specie;
use birdfarm_shop::domain::voucher::Voucher;

pub fn specie(id: &str, name: &str) -> Specie {
    Specie {
        id: id.to_string(),
        name: name.to_string(),
        image_url: None,
    }
}

pub fn bird(id: &str, name: &str, specie: Option<Specie>, kind: BirdKind, price: i64) -> Bird {
    Bird {
        id: id.to_string(),
        name: name.to_string(),
        specie,
        kind: Some(kind),
        price: Some(price),
        image_urls: vec![format!("https://img.example/{id}.jpg")],
        created_at: None,
    }
}

pub fn nest(id: &str, name: &str, specie: Option<Specie>, price: i64) -> Nest {
    Nest {
        id: id.to_string(),
        name: name.to_string(),
        specie,
        dad: None,
        mom: None,
        price: Some(price),
        image_urls: Vec::new(),
        created_at: None,
    }
}

pub fn rating(id: &str, value: u8) -> Rating {
    Rating {
        id: id.to_string(),
        user: None,
        value,
        content: Some(format!("review {id}")),
        image_urls: Vec::new(),
        created_at: None,
    }
}

pub fn voucher(code: &str, discount_percent: u8) -> Voucher {
    Voucher {
        id: format!("voucher-{code}"),
        code: code.to_string(),
        discount_percent,
        max_discount_value: None,
        conditions: None,
        expired_at: None,
    }
}

/// A stub backend stocked with a small fixed catalog.
pub fn stocked_api() -> StubApi {
    let finch = specie("sp-finch", "Finch");
    let canary = specie("sp-canary", "Canary");
    StubApi {
        birds: vec![
            bird("b1", "Zebra Finch", Some(finch.clone()), BirdKind::Sell, 50),
            bird("b2", "Society Finch", Some(finch.clone()), BirdKind::Breed, 70),
            bird("b3", "Red Canary", Some(canary.clone()), BirdKind::Sell, 120),
        ],
        nests: vec![
            nest("n1", "Finch nest", Some(finch.clone()), 200),
            nest("n2", "Canary nest", Some(canary.clone()), 260),
        ],
        species: vec![finch, canary],
        ratings: vec![
            rating("r1", 5),
            rating("r2", 4),
            rating("r3", 5),
            rating("r4", 2),
        ],
        vouchers: vec![voucher("WELCOME10", 10)],
        average: 4.0,
        ..StubApi::default()
    }
}
