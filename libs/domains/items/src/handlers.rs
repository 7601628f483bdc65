use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, JsonPayload,
    errors::responses::{
        BadRequestJsonResponse, InternalServerErrorResponse, NotFoundResponse,
        ServiceUnavailableResponse, UnprocessableEntityResponse,
    },
};
use domain_merchants::MerchantRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{ItemFilter, ItemParams};
use crate::repository::ItemRepository;
use crate::serializer::{
    ItemAttributes, ItemCollectionDocument, ItemDocument, ItemResource, ResourceType,
};
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, replace_item),
    components(
        schemas(
            ItemParams,
            ItemDocument,
            ItemCollectionDocument,
            ItemResource,
            ItemAttributes,
            ResourceType
        ),
        responses(
            NotFoundResponse,
            BadRequestJsonResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Items", description = "Catalogue items sold by merchants")
    )
)]
pub struct ApiDoc;

/// Create the items router. `PUT` behaves exactly like `PATCH`.
pub fn router<R, M>(service: ItemService<R, M>) -> Router
where
    R: ItemRepository + 'static,
    M: MerchantRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).patch(update_item).put(replace_item),
        )
        .with_state(shared_service)
}

type SharedService<R, M> = State<Arc<ItemService<R, M>>>;

/// List items, optionally filtered by name or price range
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemFilter),
    responses(
        (status = 200, description = "Matching items in id order", body = ItemCollectionDocument),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_items<R: ItemRepository, M: MerchantRepository>(
    State(service): SharedService<R, M>,
    Query(filter): Query<ItemFilter>,
) -> ItemResult<Json<ItemCollectionDocument>> {
    let items = service.list_items(filter).await?;
    Ok(Json(items.as_slice().into()))
}

/// Create an item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = ItemParams,
    responses(
        (status = 201, description = "Item created", body = ItemDocument),
        (status = 400, response = BadRequestJsonResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository, M: MerchantRepository>(
    State(service): SharedService<R, M>,
    JsonPayload(params): JsonPayload<ItemParams>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(params).await?;
    Ok((StatusCode::CREATED, Json(ItemDocument::from(&item))))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDocument),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository, M: MerchantRepository>(
    State(service): SharedService<R, M>,
    IdPath(id): IdPath,
) -> ItemResult<Json<ItemDocument>> {
    let item = service.get_item(id).await?;
    Ok(Json(ItemDocument::from(&item)))
}

/// Update some or all attributes of an item
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = ItemParams,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository, M: MerchantRepository>(
    State(service): SharedService<R, M>,
    IdPath(id): IdPath,
    JsonPayload(params): JsonPayload<ItemParams>,
) -> ItemResult<StatusCode> {
    service.update_item(id, params).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Same as `PATCH`; omitted fields keep their values
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = ItemParams,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_item<R: ItemRepository, M: MerchantRepository>(
    state: SharedService<R, M>,
    id: IdPath,
    payload: JsonPayload<ItemParams>,
) -> ItemResult<StatusCode> {
    update_item(state, id, payload).await
}
