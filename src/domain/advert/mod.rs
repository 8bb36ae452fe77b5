pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Advert, NewAdvert};
pub use repository::{AdvertReadRepository, AdvertWriteRepository};
pub use value_objects::{AdvertBody, AdvertHeader, AdvertId, Price};
