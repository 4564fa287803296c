//! OpenAPI description of the REST surface, plus the Swagger UI page.
//!
//! The document is assembled with the utoipa builder API from the same
//! route table the router registers, so the description and the dispatch
//! table cannot drift apart silently. Served as JSON and YAML under
//! `/docs/swagger.*`; the UI page is a static HTML shell that loads the
//! JSON document.

use std::sync::LazyLock;

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use utoipa::openapi::path::{
    HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemBuilder,
    PathsBuilder,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, ComponentsBuilder, ObjectBuilder, Ref, Type};
use utoipa::openapi::{
    ContentBuilder, InfoBuilder, OpenApi, OpenApiBuilder, Required, ResponseBuilder, SchemaFormat,
};

static DOC: LazyLock<OpenApi> = LazyLock::new(openapi);

/// Build the OpenAPI document for the service.
#[must_use]
pub fn openapi() -> OpenApi {
    let paths = PathsBuilder::new()
        .path("/restaurants/", collection_paths("Restaurant", "restaurants"))
        .path("/restaurants/{id}/", item_paths("Restaurant", "restaurants"))
        .path("/menus/", collection_paths("Menu", "menus"))
        .path("/menus/{id}/", item_paths("Menu", "menus"))
        .build();

    let components = ComponentsBuilder::new()
        .schema("Restaurant", record_schema("A restaurant record."))
        .schema("Menu", record_schema("A menu record."))
        .schema(
            "WriteRestaurantRequest",
            write_request_schema("Payload for creating or renaming a restaurant."),
        )
        .schema(
            "WriteMenuRequest",
            write_request_schema("Payload for creating or renaming a menu."),
        )
        .schema("Error", error_schema())
        .build();

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("Logic Service API")
                .version("latest")
                .description(Some(
                    "A Buildly RAD Core Compatible Logic Module/microservice.",
                ))
                .build(),
        )
        .paths(paths)
        .components(Some(components))
        .build()
}

fn uuid_schema() -> ObjectBuilder {
    ObjectBuilder::new()
        .schema_type(Type::String)
        .format(Some(SchemaFormat::Custom("uuid".to_string())))
}

fn name_schema() -> ObjectBuilder {
    ObjectBuilder::new()
        .schema_type(Type::String)
        .min_length(Some(1))
        .max_length(Some(255))
}

fn record_schema(description: &str) -> ObjectBuilder {
    ObjectBuilder::new()
        .description(Some(description))
        .property("id", uuid_schema())
        .required("id")
        .property("name", name_schema())
        .required("name")
}

fn write_request_schema(description: &str) -> ObjectBuilder {
    ObjectBuilder::new()
        .description(Some(description))
        .property("name", name_schema())
        .required("name")
}

fn error_schema() -> ObjectBuilder {
    ObjectBuilder::new()
        .description(Some("Structured error body."))
        .property("error", ObjectBuilder::new().schema_type(Type::String))
        .required("error")
}

fn json_content(schema_name: &str) -> ContentBuilder {
    ContentBuilder::new().schema(Some(Ref::from_schema_name(schema_name)))
}

fn record_response(schema_name: &str, description: &str) -> ResponseBuilder {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", json_content(schema_name).build())
}

fn error_response(description: &str) -> ResponseBuilder {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", json_content("Error").build())
}

fn id_parameter(entity: &str) -> ParameterBuilder {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(format!("{entity} identifier (UUID).")))
        .schema(Some(uuid_schema()))
}

fn write_body(entity: &str) -> RequestBodyBuilder {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            json_content(&format!("Write{entity}Request")).build(),
        )
        .required(Some(Required::True))
}

/// Operations on the collection path: list and create.
fn collection_paths(entity: &str, plural: &str) -> PathItem {
    let list = OperationBuilder::new()
        .summary(Some(format!("List all {plural}")))
        .operation_id(Some(format!("{plural}_list")))
        .response(
            "200",
            ResponseBuilder::new()
                .description(format!("All {plural}."))
                .content(
                    "application/json",
                    ContentBuilder::new()
                        .schema(Some(
                            ArrayBuilder::new().items(Ref::from_schema_name(entity)),
                        ))
                        .build(),
                )
                .build(),
        )
        .build();

    let create = OperationBuilder::new()
        .summary(Some(format!("Create a {entity}")))
        .operation_id(Some(format!("{plural}_create")))
        .request_body(Some(write_body(entity).build()))
        .response("201", record_response(entity, "Created record.").build())
        .response("400", error_response("Validation failure.").build())
        .build();

    PathItemBuilder::new()
        .operation(HttpMethod::Get, list)
        .operation(HttpMethod::Post, create)
        .build()
}

/// Operations on the item path: retrieve, update (full and partial), delete.
fn item_paths(entity: &str, plural: &str) -> PathItem {
    let retrieve = OperationBuilder::new()
        .summary(Some(format!("Retrieve a {entity} by id")))
        .operation_id(Some(format!("{plural}_retrieve")))
        .parameter(id_parameter(entity))
        .response("200", record_response(entity, "The matching record.").build())
        .response("404", error_response("No record with this id.").build())
        .build();

    let update = |operation_id: String| {
        OperationBuilder::new()
            .summary(Some(format!("Rename a {entity}")))
            .operation_id(Some(operation_id))
            .parameter(id_parameter(entity))
            .request_body(Some(write_body(entity).build()))
            .response("200", record_response(entity, "The updated record.").build())
            .response("400", error_response("Validation failure.").build())
            .response("404", error_response("No record with this id.").build())
            .build()
    };

    let delete = OperationBuilder::new()
        .summary(Some(format!("Delete a {entity}")))
        .operation_id(Some(format!("{plural}_delete")))
        .parameter(id_parameter(entity))
        .response(
            "204",
            ResponseBuilder::new().description("Record removed.").build(),
        )
        .response("404", error_response("No record with this id.").build())
        .build();

    PathItemBuilder::new()
        .operation(HttpMethod::Get, retrieve)
        .operation(HttpMethod::Put, update(format!("{plural}_update")))
        .operation(HttpMethod::Patch, update(format!("{plural}_partial_update")))
        .operation(HttpMethod::Delete, delete)
        .build()
}

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Logic Service API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    SwaggerUIBundle({
      url: "/docs/swagger.json",
      dom_id: "#swagger-ui",
    });
  </script>
</body>
</html>
"##;

/// `GET /docs/` — interactive documentation UI.
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// `GET /docs/swagger.json` — machine-readable schema (JSON).
pub async fn swagger_json() -> Json<OpenApi> {
    Json(DOC.clone())
}

/// `GET /docs/swagger.yaml` — machine-readable schema (YAML).
pub async fn swagger_yaml() -> Response {
    match DOC.to_yaml() {
        Ok(yaml) => ([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize OpenAPI document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
