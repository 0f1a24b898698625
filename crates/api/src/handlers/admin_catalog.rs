//! Handlers for catalog management under `/admin`.
//!
//! All handlers require `admin` or `headadmin` via [`RequireContentAdmin`].
//! Responses are bare rows; deletes answer with `{ message }`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_core::types::DbId;
use reelbase_db::models::award::{
    Award, AwardLink, AwardTarget, AwardWinner, CreateAward, CreateMovieAward, CreatePersonAward,
    MovieAward, UpdateAward,
};
use reelbase_db::models::credit::{
    AddCredit, CastMember, CreditLink, CreditListing, CrewKind, CrewMember,
};
use reelbase_db::models::genre::{AddMovieGenre, CreateGenre, Genre};
use reelbase_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use reelbase_db::models::person::{CreatePerson, Person, UpdatePerson};
use reelbase_db::repositories::{AwardRepo, CreditRepo, GenreRepo, MovieRepo, PersonRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::rbac::{CurrentUser, RequireContentAdmin};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

fn required(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        ))));
    }
    Ok(())
}

async fn ensure_movie(state: &AppState, id: DbId) -> AppResult<Movie> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Movie", id))
}

async fn ensure_person(state: &AppState, id: DbId) -> AppResult<Person> {
    PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Person", id))
}

async fn ensure_award(state: &AppState, id: DbId) -> AppResult<Award> {
    AwardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Award", id))
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

/// GET /api/admin/movies
pub async fn list_movies(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(MovieRepo::list(&state.pool).await?))
}

/// POST /api/admin/movies
pub async fn create_movie(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    required("Title", &input.title)?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, admin_id = admin.id(), "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/admin/movies/{id}
///
/// Partial update: omitted fields keep their current value.
pub async fn update_movie(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    if let Some(title) = &input.title {
        required("Title", title)?;
    }
    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Movie", id))?;
    tracing::info!(movie_id = id, admin_id = admin.id(), "Movie updated");
    Ok(Json(movie))
}

/// DELETE /api/admin/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(not_found("Movie", id));
    }
    tracing::info!(movie_id = id, admin_id = admin.id(), "Movie deleted");
    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

/// GET /api/admin/people
pub async fn list_people(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<Person>>> {
    Ok(Json(PersonRepo::list(&state.pool).await?))
}

/// POST /api/admin/people
pub async fn create_person(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    required("First name", &input.first_name)?;
    required("Last name", &input.last_name)?;
    let person = PersonRepo::create(&state.pool, &input).await?;
    tracing::info!(person_id = person.id, admin_id = admin.id(), "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /api/admin/people/{id}
pub async fn update_person(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Person", id))?;
    tracing::info!(person_id = id, admin_id = admin.id(), "Person updated");
    Ok(Json(person))
}

/// DELETE /api/admin/people/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !PersonRepo::delete(&state.pool, id).await? {
        return Err(not_found("Person", id));
    }
    tracing::info!(person_id = id, admin_id = admin.id(), "Person deleted");
    Ok(Json(MessageResponse::new("Person deleted successfully")))
}

// ---------------------------------------------------------------------------
// Awards
// ---------------------------------------------------------------------------

/// GET /api/admin/awards
pub async fn list_awards(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<Award>>> {
    Ok(Json(AwardRepo::list(&state.pool).await?))
}

/// POST /api/admin/awards
pub async fn create_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Json(input): Json<CreateAward>,
) -> AppResult<(StatusCode, Json<Award>)> {
    required("Award name", &input.name)?;
    let award = AwardRepo::create(&state.pool, &input).await?;
    tracing::info!(award_id = award.id, admin_id = admin.id(), "Award created");
    Ok((StatusCode::CREATED, Json(award)))
}

/// PUT /api/admin/awards/{id}
pub async fn update_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAward>,
) -> AppResult<Json<Award>> {
    let award = AwardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Award", id))?;
    tracing::info!(award_id = id, admin_id = admin.id(), "Award updated");
    Ok(Json(award))
}

/// DELETE /api/admin/awards/{id}
pub async fn delete_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !AwardRepo::delete(&state.pool, id).await? {
        return Err(not_found("Award", id));
    }
    tracing::info!(award_id = id, admin_id = admin.id(), "Award deleted");
    Ok(Json(MessageResponse::new("Award deleted successfully")))
}

/// GET /api/admin/awards/{id}/winners
pub async fn award_winners(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<AwardWinner>>> {
    ensure_award(&state, id).await?;
    Ok(Json(AwardRepo::winners(&state.pool, id).await?))
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

/// GET /api/admin/genres
pub async fn list_genres(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(GenreRepo::list(&state.pool).await?))
}

/// POST /api/admin/genres
pub async fn create_genre(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Json(input): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    required("Genre name", &input.name)?;
    let genre = GenreRepo::create(&state.pool, input.name.trim())
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "uq_genres_name") {
                AppError::Core(CoreError::Conflict(format!(
                    "Genre '{}' already exists",
                    input.name.trim()
                )))
            } else {
                AppError::Database(e)
            }
        })?;
    tracing::info!(genre_id = genre.id, admin_id = admin.id(), "Genre created");
    Ok((StatusCode::CREATED, Json(genre)))
}

/// DELETE /api/admin/genres/{id}
pub async fn delete_genre(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !GenreRepo::delete(&state.pool, id).await? {
        return Err(not_found("Genre", id));
    }
    tracing::info!(genre_id = id, admin_id = admin.id(), "Genre deleted");
    Ok(Json(MessageResponse::new("Genre deleted successfully")))
}

// ---------------------------------------------------------------------------
// Crew and credit listings
// ---------------------------------------------------------------------------

/// GET /api/admin/actors
pub async fn list_actors(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<CrewMember>>> {
    Ok(Json(CreditRepo::list_crew(&state.pool, CrewKind::Actor).await?))
}

/// GET /api/admin/directors
pub async fn list_directors(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<CrewMember>>> {
    Ok(Json(CreditRepo::list_crew(&state.pool, CrewKind::Director).await?))
}

/// GET /api/admin/writers
pub async fn list_writers(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<CrewMember>>> {
    Ok(Json(CreditRepo::list_crew(&state.pool, CrewKind::Writer).await?))
}

/// GET /api/admin/roles
pub async fn list_roles(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<CreditListing>>> {
    Ok(Json(
        CreditRepo::list_all_credits(&state.pool, CrewKind::Actor).await?,
    ))
}

/// GET /api/admin/movie-directors
pub async fn list_movie_directors(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<CreditListing>>> {
    Ok(Json(
        CreditRepo::list_all_credits(&state.pool, CrewKind::Director).await?,
    ))
}

/// GET /api/admin/movie-writers
pub async fn list_movie_writers(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
) -> AppResult<Json<Vec<CreditListing>>> {
    Ok(Json(
        CreditRepo::list_all_credits(&state.pool, CrewKind::Writer).await?,
    ))
}

// ---------------------------------------------------------------------------
// Per-movie genres
// ---------------------------------------------------------------------------

/// GET /api/admin/movies/{id}/genres
pub async fn movie_genres(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<Genre>>> {
    ensure_movie(&state, movie_id).await?;
    Ok(Json(GenreRepo::list_for_movie(&state.pool, movie_id).await?))
}

/// POST /api/admin/movies/{id}/genres
pub async fn add_movie_genre(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
    Json(input): Json<AddMovieGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    ensure_movie(&state, movie_id).await?;
    GenreRepo::find_by_id(&state.pool, input.genre_id)
        .await?
        .ok_or_else(|| not_found("Genre", input.genre_id))?;

    let genre = GenreRepo::add_to_movie(&state.pool, movie_id, input.genre_id).await?;
    tracing::info!(movie_id, genre_id = genre.id, admin_id = admin.id(), "Genre added to movie");
    Ok((StatusCode::CREATED, Json(genre)))
}

/// DELETE /api/admin/movies/{id}/genres/{genre_id}
pub async fn remove_movie_genre(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path((movie_id, genre_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    if !GenreRepo::remove_from_movie(&state.pool, movie_id, genre_id).await? {
        return Err(not_found("Movie genre", genre_id));
    }
    tracing::info!(movie_id, genre_id, admin_id = admin.id(), "Genre removed from movie");
    Ok(Json(MessageResponse::new("Genre removed from movie")))
}

// ---------------------------------------------------------------------------
// Per-movie credits
// ---------------------------------------------------------------------------

/// GET /api/admin/movies/{id}/roles
pub async fn movie_roles(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<CastMember>>> {
    ensure_movie(&state, movie_id).await?;
    Ok(Json(CreditRepo::cast_for_movie(&state.pool, movie_id).await?))
}

/// POST /api/admin/movies/{id}/roles
///
/// Creates the person's actor record on first use.
pub async fn add_movie_role(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
    Json(input): Json<AddCredit>,
) -> AppResult<(StatusCode, Json<CreditLink>)> {
    add_credit(&state, &admin, CrewKind::Actor, movie_id, input).await
}

/// DELETE /api/admin/movies/{id}/roles/{role_id}
pub async fn remove_movie_role(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path((movie_id, role_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    remove_credit(&state, &admin, CrewKind::Actor, movie_id, role_id).await
}

/// GET /api/admin/movies/{id}/directors
pub async fn movie_directors(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<CrewMember>>> {
    ensure_movie(&state, movie_id).await?;
    Ok(Json(
        CreditRepo::crew_for_movie(&state.pool, CrewKind::Director, movie_id).await?,
    ))
}

/// POST /api/admin/movies/{id}/directors
pub async fn add_movie_director(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
    Json(input): Json<AddCredit>,
) -> AppResult<(StatusCode, Json<CreditLink>)> {
    add_credit(&state, &admin, CrewKind::Director, movie_id, input).await
}

/// DELETE /api/admin/movies/{id}/directors/{director_id}
pub async fn remove_movie_director(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path((movie_id, director_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    remove_credit(&state, &admin, CrewKind::Director, movie_id, director_id).await
}

/// GET /api/admin/movies/{id}/writers
pub async fn movie_writers(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<CrewMember>>> {
    ensure_movie(&state, movie_id).await?;
    Ok(Json(
        CreditRepo::crew_for_movie(&state.pool, CrewKind::Writer, movie_id).await?,
    ))
}

/// POST /api/admin/movies/{id}/writers
pub async fn add_movie_writer(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
    Json(input): Json<AddCredit>,
) -> AppResult<(StatusCode, Json<CreditLink>)> {
    add_credit(&state, &admin, CrewKind::Writer, movie_id, input).await
}

/// DELETE /api/admin/movies/{id}/writers/{writer_id}
pub async fn remove_movie_writer(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path((movie_id, writer_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    remove_credit(&state, &admin, CrewKind::Writer, movie_id, writer_id).await
}

/// GET /api/admin/movies/{id}/awards
pub async fn movie_awards(
    State(state): State<AppState>,
    RequireContentAdmin(_admin): RequireContentAdmin,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<MovieAward>>> {
    ensure_movie(&state, movie_id).await?;
    Ok(Json(AwardRepo::links_for_movie(&state.pool, movie_id).await?))
}

async fn add_credit(
    state: &AppState,
    admin: &CurrentUser,
    kind: CrewKind,
    movie_id: DbId,
    input: AddCredit,
) -> AppResult<(StatusCode, Json<CreditLink>)> {
    ensure_movie(state, movie_id).await?;
    ensure_person(state, input.person_id).await?;

    // Character names only apply to cast credits.
    let character_name = match kind {
        CrewKind::Actor => input.character_name.as_deref(),
        CrewKind::Director | CrewKind::Writer => None,
    };

    let link = CreditRepo::add_credit(&state.pool, kind, movie_id, input.person_id, character_name)
        .await?;

    tracing::info!(
        movie_id,
        person_id = input.person_id,
        credit = kind.table(),
        admin_id = admin.id(),
        "Credit added"
    );
    Ok((StatusCode::CREATED, Json(link)))
}

async fn remove_credit(
    state: &AppState,
    admin: &CurrentUser,
    kind: CrewKind,
    movie_id: DbId,
    key: DbId,
) -> AppResult<Json<MessageResponse>> {
    if !CreditRepo::remove_credit(&state.pool, kind, movie_id, key).await? {
        return Err(not_found("Credit", key));
    }
    tracing::info!(movie_id, key, credit = kind.table(), admin_id = admin.id(), "Credit removed");
    Ok(Json(MessageResponse::new("Credit removed from movie")))
}

// ---------------------------------------------------------------------------
// Award links
// ---------------------------------------------------------------------------

/// POST /api/admin/award-movies
pub async fn link_movie_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Json(input): Json<CreateMovieAward>,
) -> AppResult<(StatusCode, Json<AwardLink>)> {
    required("Category", &input.category)?;
    ensure_award(&state, input.award_id).await?;
    ensure_movie(&state, input.movie_id).await?;

    let link = AwardRepo::link_movie(&state.pool, &input).await?;
    tracing::info!(
        award_id = input.award_id,
        movie_id = input.movie_id,
        admin_id = admin.id(),
        "Movie award linked"
    );
    Ok((StatusCode::CREATED, Json(link)))
}

/// POST /api/admin/award-actors
pub async fn link_actor_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Json(input): Json<CreatePersonAward>,
) -> AppResult<(StatusCode, Json<AwardLink>)> {
    link_person_award(&state, &admin, CrewKind::Actor, input).await
}

/// POST /api/admin/award-directors
pub async fn link_director_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Json(input): Json<CreatePersonAward>,
) -> AppResult<(StatusCode, Json<AwardLink>)> {
    link_person_award(&state, &admin, CrewKind::Director, input).await
}

/// DELETE /api/admin/award-movies/{id}
pub async fn unlink_movie_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    unlink_award(&state, &admin, AwardTarget::Movie, id).await
}

/// DELETE /api/admin/award-actors/{id}
pub async fn unlink_actor_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    unlink_award(&state, &admin, AwardTarget::Actor, id).await
}

/// DELETE /api/admin/award-directors/{id}
pub async fn unlink_director_award(
    State(state): State<AppState>,
    RequireContentAdmin(admin): RequireContentAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    unlink_award(&state, &admin, AwardTarget::Director, id).await
}

async fn link_person_award(
    state: &AppState,
    admin: &CurrentUser,
    kind: CrewKind,
    input: CreatePersonAward,
) -> AppResult<(StatusCode, Json<AwardLink>)> {
    required("Category", &input.category)?;
    ensure_award(state, input.award_id).await?;
    ensure_movie(state, input.movie_id).await?;
    ensure_person(state, input.person_id).await?;

    let link = AwardRepo::link_person(
        &state.pool,
        kind,
        input.award_id,
        input.movie_id,
        input.person_id,
        &input.category,
    )
    .await?;

    tracing::info!(
        award_id = input.award_id,
        person_id = input.person_id,
        credit = kind.table(),
        admin_id = admin.id(),
        "Person award linked"
    );
    Ok((StatusCode::CREATED, Json(link)))
}

async fn unlink_award(
    state: &AppState,
    admin: &CurrentUser,
    target: AwardTarget,
    id: DbId,
) -> AppResult<Json<MessageResponse>> {
    if !AwardRepo::unlink(&state.pool, target, id).await? {
        return Err(not_found("Award link", id));
    }
    tracing::info!(link_id = id, table = target.table(), admin_id = admin.id(), "Award unlinked");
    Ok(Json(MessageResponse::new("Award link removed")))
}
