use crate::dto::SellerDto;
use crate::model::{Seller, SellerFields, SellerId};

pub fn to_dto(seller: &Seller) -> SellerDto {
    SellerDto {
        id: Some(seller.id.0),
        name: Some(seller.name.clone()),
    }
}

/// A seller reference carrying only the identifier.
pub fn to_reference(id: SellerId) -> SellerDto {
    SellerDto {
        id: Some(id.0),
        name: None,
    }
}

/// Storable fields of a validated payload. The payload `id` is not part of them.
pub fn to_fields(dto: &SellerDto) -> SellerFields {
    SellerFields {
        name: dto.name.clone().unwrap_or_default(),
    }
}
