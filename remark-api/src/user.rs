#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserImage {
    pub png: String,
    pub webp: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub username: String,
    pub image: UserImage,
}

impl User {
    pub fn stub() -> User {
        User {
            username: String::from("stub"),
            image: UserImage::default(),
        }
    }
}
