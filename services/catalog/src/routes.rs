//! Catalog service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::WithRejection;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    error::ApiError,
    middleware::cors_layer,
    models::{
        CreateProductRequest, HealthResponse, MessageResponse, ProductFields,
        UpdateProductRequest,
    },
    state::AppState,
    validation::{validate_name, validate_price},
};

/// Display default applied when a product carries no image
const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=Product";

/// Display default applied when a product carries no category
const DEFAULT_CATEGORY: &str = "General";

/// Create the router for the catalog service
///
/// In production the router additionally serves the built client bundle and
/// falls back to its entry document for unmatched routes (SPA routing).
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/categories", get(list_categories))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.production {
        router.fallback_service(static_assets(&config.static_dir))
    } else {
        router
    }
}

/// Static asset service for the built client bundle
fn static_assets(static_dir: &str) -> ServeDir<SetStatus<ServeFile>> {
    let index = std::path::Path::new(static_dir).join("index.html");
    ServeDir::new(static_dir).not_found_service(ServeFile::new(index))
}

/// Validate a product payload and apply the display defaults
fn validate_payload(
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    image_url: Option<String>,
    category: Option<String>,
) -> Result<ProductFields, ApiError> {
    validate_name(name.as_deref()).map_err(ApiError::Validation)?;
    validate_price(price).map_err(ApiError::Validation)?;

    let image_url = match image_url {
        Some(url) if !url.trim().is_empty() => url,
        _ => PLACEHOLDER_IMAGE_URL.to_string(),
    };
    let category = match category {
        Some(category) if !category.trim().is_empty() => category,
        _ => DEFAULT_CATEGORY.to_string(),
    };

    Ok(ProductFields {
        name: name.unwrap_or_default(),
        description,
        price: price.unwrap_or_default(),
        image_url,
        category,
    })
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: "catalog-service",
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// Get all products, newest first
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = state.product_repository.list_all().await.map_err(|e| {
        tracing::error!("Failed to list products: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(products))
}

/// Get a product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .product_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProductRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let fields = validate_payload(
        payload.name,
        payload.description,
        payload.price,
        payload.image_url,
        payload.category,
    )?;

    let product = state.product_repository.create(&fields).await.map_err(|e| {
        tracing::error!("Failed to create product: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Overwrite all mutable fields of a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateProductRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let fields = validate_payload(
        payload.name,
        payload.description,
        payload.price,
        payload.image_url,
        payload.category,
    )?;

    let updated = state
        .product_repository
        .update(id, &fields)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update product: {}", e);
            ApiError::InternalServerError
        })?;

    if updated {
        Ok(Json(MessageResponse {
            message: "Product updated successfully".to_string(),
        }))
    } else {
        Err(ApiError::NotFound("Product not found".to_string()))
    }
}

/// Delete a product by ID
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.product_repository.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete product: {}", e);
        ApiError::InternalServerError
    })?;

    if deleted {
        Ok(Json(MessageResponse {
            message: "Product deleted successfully".to_string(),
        }))
    } else {
        Err(ApiError::NotFound("Product not found".to_string()))
    }
}

/// Get the distinct categories across all products
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .product_repository
        .distinct_categories()
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(categories))
}
