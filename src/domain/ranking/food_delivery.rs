//! Built-in food-delivery domain: seven criteria, three apps.

use super::fuzzy::TriangularFuzzyNumber as Tfn;
use super::CriterionKind::{self, Benefit, Cost};

pub(super) const NAME: &str = "food-delivery";

/// (code, display name, kind) in matrix column order.
pub(super) const CRITERIA: [(&str, &str, CriterionKind); 7] = [
    ("HP", "Harga Produk", Cost),
    ("P", "Promo", Benefit),
    ("KP", "Kecepatan Pengantaran", Benefit),
    ("HO", "Harga Ongkir", Cost),
    ("KR", "Kelengkapan Restoran dan Menu", Benefit),
    ("KM", "Keadaan Makanan", Benefit),
    ("KK", "Keramahan Kurir", Benefit),
];

pub(super) const ALTERNATIVES: [(&str, &str); 3] = [
    ("GO", "GoFood (Gojek)"),
    ("GR", "GrabFood (Grab)"),
    ("SF", "ShopeeFood (Shopee)"),
];

/// Ratings per alternative (rows, same order as `ALTERNATIVES`) and
/// criterion (columns, same order as `CRITERIA`). Already scaled into [0, 1].
pub(super) const RATINGS: [[Tfn; 7]; 3] = [
    [
        Tfn::from_parts(0.544414, 0.765, 0.8812),
        Tfn::from_parts(0.55789, 0.77971, 0.88227),
        Tfn::from_parts(0.49492, 0.712, 0.8528),
        Tfn::from_parts(0.55334, 0.77443, 0.88013),
        Tfn::from_parts(0.56464, 0.79017, 0.89541),
        Tfn::from_parts(0.57075, 0.79256, 0.88192),
        Tfn::from_parts(0.50063, 0.72037, 0.86675),
    ],
    [
        Tfn::from_parts(0.53831, 0.76335, 0.89047),
        Tfn::from_parts(0.54298, 0.76459, 0.87977),
        Tfn::from_parts(0.49237, 0.71289, 0.86127),
        Tfn::from_parts(0.52525, 0.74663, 0.87220),
        Tfn::from_parts(0.52824, 0.7521, 0.88549),
        Tfn::from_parts(0.56015, 0.78093, 0.87761),
        Tfn::from_parts(0.47474, 0.69039, 0.84050),
    ],
    [
        Tfn::from_parts(0.54761, 0.7683, 0.87581),
        Tfn::from_parts(0.55344, 0.78012, 0.894),
        Tfn::from_parts(0.50876, 0.73038, 0.86712),
        Tfn::from_parts(0.53063, 0.75545, 0.88478),
        Tfn::from_parts(0.52284, 0.74196, 0.86457),
        Tfn::from_parts(0.56296, 0.78897, 0.89365),
        Tfn::from_parts(0.48461, 0.70308, 0.85206),
    ],
];

/// The questionnaire order; the first code of each pair is "A".
pub(super) const QUESTIONS: [(&str, &str); 21] = [
    ("HP", "P"),
    ("HP", "KP"),
    ("HP", "HO"),
    ("HP", "KR"),
    ("HP", "KM"),
    ("HP", "KK"),
    ("KP", "P"),
    ("KP", "HO"),
    ("KP", "KR"),
    ("KP", "KM"),
    ("KP", "KK"),
    ("P", "HO"),
    ("P", "KR"),
    ("P", "KM"),
    ("P", "KK"),
    ("HO", "KR"),
    ("HO", "KM"),
    ("HO", "KK"),
    ("KR", "KM"),
    ("KR", "KK"),
    ("KM", "KK"),
];
