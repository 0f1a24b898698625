//! Route definitions for watchlists and favourites, mounted at `/user`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::user_lists;
use crate::state::AppState;

/// Routes mounted at `/user`. All require auth.
///
/// ```text
/// POST   /addtowatch            -> add_to_watchlist
/// GET    /checkinwatchlist      -> check_in_watchlist (?movie_id, user_id)
/// DELETE /removefromlist        -> remove_from_watchlist
/// GET    /watchlist/{user_id}   -> get_watchlist
///
/// POST   /addtofav              -> add_to_favourites
/// GET    /checkinfav            -> check_in_favourites (?movie_id, user_id)
/// DELETE /removefromfav         -> remove_from_favourites
/// GET    /favourites/{user_id}  -> get_favourites
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/addtowatch", post(user_lists::add_to_watchlist))
        .route("/checkinwatchlist", get(user_lists::check_in_watchlist))
        .route("/removefromlist", delete(user_lists::remove_from_watchlist))
        .route("/watchlist/{user_id}", get(user_lists::get_watchlist))
        .route("/addtofav", post(user_lists::add_to_favourites))
        .route("/checkinfav", get(user_lists::check_in_favourites))
        .route("/removefromfav", delete(user_lists::remove_from_favourites))
        .route("/favourites/{user_id}", get(user_lists::get_favourites))
}
