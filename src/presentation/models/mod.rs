use poem_openapi::Enum;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum HairColor {
    #[oai(rename = "white")]
    White,
    #[oai(rename = "brown")]
    Brown,
    #[oai(rename = "black")]
    Black,
    #[oai(rename = "blonde")]
    Blonde,
    #[oai(rename = "red")]
    Red,
}
