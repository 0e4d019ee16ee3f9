use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::error::ApiError;
use crate::models::{Client, DepthOrder, HistoryOrder};
use crate::services::{OrderBookService, OrderHistoryService};

pub const ORDER_BOOK_SAVED: &str = "Order book saved successfully";
pub const ORDER_SAVED: &str = "Order saved successfully";

#[derive(Clone)]
pub struct AppState {
    pub order_book: OrderBookService,
    pub order_history: OrderHistoryService,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            order_book: OrderBookService::new(db.clone()),
            order_history: OrderHistoryService::new(db),
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/order-book/:exchange/:pair",
            get(get_order_book).post(save_order_book),
        )
        .route(
            "/order-history/:client_name/:exchange_name/:label/:pair",
            get(get_order_history).post(save_order),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn get_order_book(
    State(state): State<AppState>,
    Path((exchange, pair)): Path<(String, String)>,
) -> Result<Json<Vec<DepthOrder>>, ApiError> {
    let orders = state.order_book.get(&exchange, &pair).await?;
    Ok(Json(orders))
}

async fn save_order_book(
    State(state): State<AppState>,
    Path((exchange, pair)): Path<(String, String)>,
    payload: Result<Json<Vec<DepthOrder>>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(orders) = payload?;
    state.order_book.replace(exchange, pair, orders).await?;
    Ok(Json(MessageResponse {
        message: ORDER_BOOK_SAVED,
    }))
}

async fn get_order_history(
    State(state): State<AppState>,
    Path(client): Path<Client>,
) -> Result<Json<Vec<HistoryOrder>>, ApiError> {
    let orders = state.order_history.get(&client).await?;
    Ok(Json(orders))
}

async fn save_order(
    State(state): State<AppState>,
    Path(client): Path<Client>,
    payload: Result<Json<HistoryOrder>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(order) = payload?;
    state.order_history.append(&client, order).await?;
    Ok(Json(MessageResponse {
        message: ORDER_SAVED,
    }))
}
