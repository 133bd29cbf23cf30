//! Conversions between the Dato entity and its transport object

use dato::Dato;

use crate::models::DatoDto;

/// Build a Dato from a transport object, using `id` as its identifier.
///
/// Pass `None` to let storage assign the id.
pub fn to_dato(id: Option<String>) -> impl Fn(DatoDto) -> Dato {
    move |dto| Dato {
        id: id.clone(),
        information: dto.information,
    }
}

/// Copy a Dato field for field into its transport object
pub fn to_dto() -> impl Fn(Dato) -> DatoDto {
    DatoDto::from
}
