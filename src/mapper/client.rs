use crate::dto::ClientDto;
use crate::mapper::seller;
use crate::model::{Client, ClientFields, Seller, SellerId};

/// Maps a client with its seller reduced to a bare reference.
pub fn to_dto(client: &Client) -> ClientDto {
    ClientDto {
        id: Some(client.id.0),
        name: Some(client.name.clone()),
        seller: client.seller_id.map(seller::to_reference),
    }
}

/// Maps a client with its seller populated. Falls back to a bare reference when the seller
/// could not be resolved.
pub fn to_dto_with_seller(client: &Client, resolved: Option<&Seller>) -> ClientDto {
    let mut dto = to_dto(client);
    if let Some(found) = resolved.filter(|s| Some(s.id) == client.seller_id) {
        dto.seller = Some(seller::to_dto(found));
    }
    dto
}

pub fn seller_reference(dto: &ClientDto) -> Option<SellerId> {
    dto.seller_id().map(SellerId)
}

/// Storable fields of a validated payload. The payload `id` is not part of them.
pub fn to_fields(dto: &ClientDto) -> ClientFields {
    ClientFields {
        name: dto.name.clone().unwrap_or_default(),
        seller_id: seller_reference(dto),
    }
}
