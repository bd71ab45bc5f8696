//! Routes showing the framework's request and response features on a toy
//! `Person` resource. Nothing here is persisted.

use poem::Result as PoemResult;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Cookie, Header, Path, Query},
    payload::{Form, Json},
};

use crate::{
    domain::{
        errors::DomainError,
        validation::{check_email, check_length},
    },
    presentation::http::{
        endpoints::root::EndpointsTags,
        requests::{ContactFormDto, LoginFormDto, PersonDto, PersonUpdateRequestDto, UploadImageDto},
        responses::{
            AgeCheckDto, ContactReceivedDto, GreetingDto, ImageInfoDto, LoginOutDto,
            PersonDetailDto, PersonFoundDto, PersonLocatedDto, PersonOutDto,
        },
    },
};

const KNOWN_PERSONS: [u32; 5] = [1, 2, 3, 4, 5];
const ADULT_AGE: u32 = 18;

#[derive(ApiResponse)]
pub enum CreatePersonResponse {
    #[oai(status = 201)]
    Created(Json<PersonOutDto>),
}

pub struct PlaygroundEndpoints;

#[OpenApi(prefix_path = "/playground")]
impl PlaygroundEndpoints {
    /// Say hello
    #[oai(path = "/hello", method = "get", tag = EndpointsTags::Playground)]
    pub async fn hello(&self) -> Json<GreetingDto> {
        Json(greeting())
    }

    /// Say hello (legacy route)
    ///
    /// Kept for old clients; use `/playground/hello` instead.
    #[oai(
        path = "/hello-legacy",
        method = "get",
        tag = EndpointsTags::Playground,
        deprecated,
    )]
    pub async fn hello_legacy(&self) -> Json<GreetingDto> {
        Json(greeting())
    }

    /// Create a Person
    ///
    /// The password is validated but never echoed back.
    #[oai(path = "/person/new", method = "post", tag = EndpointsTags::Playground)]
    pub async fn create_person(&self, person: Json<PersonDto>) -> CreatePersonResponse {
        CreatePersonResponse::Created(Json(person.0.into()))
    }

    /// Show a Person from query parameters
    #[oai(path = "/person/detail", method = "get", tag = EndpointsTags::Playground)]
    pub async fn person_detail(
        &self,
        #[oai(validator(min_length = 1, max_length = 50))] name: Query<Option<String>>,
        #[oai(validator(minimum(value = "1"), maximum(value = "115")))] age: Query<u8>,
    ) -> Json<PersonDetailDto> {
        Json(PersonDetailDto {
            name: name.0,
            age: age.0,
        })
    }

    /// Find a Person by id
    #[oai(
        path = "/person/detail/:person_id",
        method = "get",
        tag = EndpointsTags::Playground,
    )]
    pub async fn find_person(
        &self,
        #[oai(validator(minimum(value = "1")))] person_id: Path<u32>,
    ) -> PoemResult<Json<PersonFoundDto>> {
        let person_id = person_id.0;
        if !KNOWN_PERSONS.contains(&person_id) {
            return Err(DomainError::NotFound(format!("person {person_id}")).into());
        }

        Ok(Json(PersonFoundDto {
            person_id,
            message: "It exists!".to_string(),
        }))
    }

    /// Update a Person and their location
    #[oai(path = "/person/:person_id", method = "put", tag = EndpointsTags::Playground)]
    pub async fn update_person(
        &self,
        #[oai(validator(minimum(value = "1")))] person_id: Path<u32>,
        request: Json<PersonUpdateRequestDto>,
    ) -> Json<PersonLocatedDto> {
        let request = request.0;
        Json(PersonLocatedDto {
            person_id: person_id.0,
            person: request.person.into(),
            location: request.location,
        })
    }

    /// Login with a form
    #[oai(path = "/login", method = "post", tag = EndpointsTags::Playground)]
    pub async fn login(&self, form: Form<LoginFormDto>) -> PoemResult<Json<LoginOutDto>> {
        let form = form.0;
        check_length("username", &form.username, 1, Some(20))?;
        check_length("password", &form.password, 8, None)?;

        Ok(Json(LoginOutDto {
            username: form.username,
            message: "Login Successfully!".to_string(),
        }))
    }

    /// Contact form
    ///
    /// Echoes the `User-Agent` header and the `ads` cookie back to the caller.
    #[oai(path = "/contact", method = "post", tag = EndpointsTags::Playground)]
    pub async fn contact(
        &self,
        form: Form<ContactFormDto>,
        #[oai(name = "User-Agent")] user_agent: Header<Option<String>>,
        #[oai(name = "ads")] ads: Cookie<Option<String>>,
    ) -> PoemResult<Json<ContactReceivedDto>> {
        let form = form.0;
        check_length("first_name", &form.first_name, 1, Some(20))?;
        check_length("last_name", &form.last_name, 1, Some(20))?;
        check_email("email", &form.email)?;
        check_length("message", &form.message, 20, None)?;

        Ok(Json(ContactReceivedDto {
            email: form.email,
            user_agent: user_agent.0,
            ads: ads.0,
        }))
    }

    /// Upload an image
    #[oai(path = "/post-image", method = "post", tag = EndpointsTags::Playground)]
    pub async fn post_image(&self, upload: UploadImageDto) -> Json<ImageInfoDto> {
        let image = upload.image;
        let size_kb = (image.size() as f64 / 1024.0 * 100.0).round() / 100.0;

        Json(ImageInfoDto {
            filename: image.file_name().unwrap_or_default().to_string(),
            format: image
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string(),
            size_kb,
        })
    }

    /// Reject minors
    ///
    /// Ages below 18 are refused with `403 Forbidden`.
    #[oai(path = "/error-request/:age", method = "get", tag = EndpointsTags::Playground)]
    pub async fn error_request(&self, age: Path<u32>) -> PoemResult<Json<AgeCheckDto>> {
        let age = age.0;
        if age < ADULT_AGE {
            return Err(DomainError::Forbidden(format!(
                "must be at least {ADULT_AGE} years old, got {age}"
            ))
            .into());
        }

        Ok(Json(AgeCheckDto {
            age,
            message: "Welcome!".to_string(),
        }))
    }
}

fn greeting() -> GreetingDto {
    GreetingDto {
        greeting: "HelloWorld!".to_string(),
    }
}
