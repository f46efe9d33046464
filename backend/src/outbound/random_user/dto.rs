//! DTOs for decoding random user generator responses.

use serde::Deserialize;

use crate::domain::ports::RandomUser;

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserResponseDto {
    #[serde(default)]
    pub(super) results: Vec<RandomUserDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserDto {
    name: NameDto,
    gender: String,
    dob: DobDto,
    picture: PictureDto,
    location: LocationDto,
}

#[derive(Debug, Deserialize)]
struct NameDto {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct DobDto {
    age: u32,
}

#[derive(Debug, Deserialize)]
struct PictureDto {
    large: String,
}

#[derive(Debug, Deserialize)]
struct LocationDto {
    city: String,
    country: String,
    street: StreetDto,
}

#[derive(Debug, Deserialize)]
struct StreetDto {
    name: String,
    number: i64,
}

impl RandomUserResponseDto {
    pub(super) fn into_first_user(self) -> Option<RandomUser> {
        self.results.into_iter().next().map(RandomUserDto::into_domain)
    }
}

impl RandomUserDto {
    fn into_domain(self) -> RandomUser {
        RandomUser {
            first_name: self.name.first,
            last_name: self.name.last,
            gender: self.gender,
            age: self.dob.age,
            picture: self.picture.large,
            city: self.location.city,
            country: self.location.country,
            street_name: self.location.street.name,
            street_number: self.location.street.number,
        }
    }
}
