use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HomeResponse { pub message: String, pub doc: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginResponse { pub email: String, pub profile: String, pub token: String }

#[derive(ToSchema)]
pub struct AdministratorRequest {
    pub email: String,
    pub password: String,
    /// `Adm` or `Editor`
    pub profile: String,
}

#[derive(ToSchema)]
pub struct AdministratorDoc { pub id: i32, pub email: String, pub profile: String }

#[derive(ToSchema)]
pub struct VehicleRequest {
    pub name: String,
    pub brand: String,
    /// 1950 or later
    pub year: i32,
}

#[derive(ToSchema)]
pub struct VehicleDoc { pub id: i32, pub name: String, pub brand: String, pub year: i32 }

#[derive(ToSchema)]
pub struct ValidationErrorsDoc { pub messages: Vec<String> }

/// Registers the `bearer` scheme referenced by protected paths.
struct BearerAddon;

impl Modify for BearerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Vehicles API", description = "Administrators and vehicles behind bearer-token auth."),
    modifiers(&BearerAddon),
    paths(
        crate::routes::home,
        crate::routes::auth::login,
        crate::routes::administrators::create,
        crate::routes::administrators::list,
        crate::routes::administrators::get,
        crate::routes::administrators::update,
        crate::routes::administrators::delete,
        crate::routes::vehicles::create,
        crate::routes::vehicles::list,
        crate::routes::vehicles::get,
        crate::routes::vehicles::update,
        crate::routes::vehicles::delete,
    ),
    components(
        schemas(
            HomeResponse,
            LoginRequest,
            LoginResponse,
            AdministratorRequest,
            AdministratorDoc,
            VehicleRequest,
            VehicleDoc,
            ValidationErrorsDoc,
        )
    ),
    tags(
        (name = "home"),
        (name = "administrators"),
        (name = "vehicles")
    )
)]
pub struct ApiDoc;
