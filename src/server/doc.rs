//! OpenAPI document of the ShareIt server, served through Swagger UI.

use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingShortDto, BookingStatus, CreateBookingDto},
        comment::{CommentDto, CreateCommentDto},
        item::{CreateItemDto, ItemDto, ItemExtraInfoDto, UpdateItemDto},
        request::{CreateItemRequestDto, ItemRequestDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::controller::{booking, item, request, user},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ShareIt API",
        description = "Peer-to-peer item sharing: users list items, book other users' items and post requests for missing ones."
    ),
    paths(
        user::create_user,
        user::update_user,
        user::get_user,
        user::get_users,
        user::delete_user,
        item::create_item,
        item::update_item,
        item::get_item,
        item::get_user_items,
        item::search_items,
        item::add_comment,
        booking::create_booking,
        booking::approve_booking,
        booking::get_booking,
        booking::get_user_bookings,
        booking::get_owner_bookings,
        request::create_request,
        request::get_own_requests,
        request::get_other_requests,
        request::get_request,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        ItemDto,
        CreateItemDto,
        UpdateItemDto,
        ItemExtraInfoDto,
        CommentDto,
        CreateCommentDto,
        BookingDto,
        BookingShortDto,
        BookingStatus,
        CreateBookingDto,
        ItemRequestDto,
        CreateItemRequestDto,
    )),
    tags(
        (name = "user", description = "User registration and profile"),
        (name = "item", description = "Listed items, search and comments"),
        (name = "booking", description = "Booking requests and approvals"),
        (name = "request", description = "Requests for items nobody lists yet")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/users",
            "/users/{user_id}",
            "/items",
            "/items/search",
            "/items/{item_id}",
            "/items/{item_id}/comment",
            "/bookings",
            "/bookings/owner",
            "/bookings/{booking_id}",
            "/requests",
            "/requests/all",
            "/requests/{request_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} is not documented");
        }
    }

    #[test]
    fn registers_error_schema() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;

        assert!(schemas.contains_key("ErrorDto"));
        assert!(schemas.contains_key("BookingDto"));
    }
}
