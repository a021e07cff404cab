use super::Result;
use crate::database::error::DatabaseError;
use crate::database::model::address::Address;
use crate::database::model::club::Club;
use crate::database::schema::{address, club};
use diesel::prelude::*;
use dto::club::NewClub;
use dto::club_category::ClubCategory;

/// Insert a club, along with its address when it has one.
/// Return the number of inserted clubs.
pub fn insert(connection: &mut SqliteConnection, new_club: &NewClub) -> Result<usize> {
    connection.transaction::<_, DatabaseError, _>(|connection| {
        let address_id = match new_club.address() {
            Some(new_address) => Some(insert_address(connection, new_address)?),
            None => None,
        };

        let count = diesel::insert_into(club::table)
            .values((
                club::title.eq(new_club.title()),
                club::image.eq(new_club.image()),
                club::description.eq(new_club.description()),
                club::club_category.eq(new_club.club_category().to_string()),
                club::address_id.eq(address_id),
            ))
            .execute(connection)?;

        debug!("Inserted club [title: {}]", new_club.title());
        Ok(count)
    })
}

fn insert_address(
    connection: &mut SqliteConnection,
    new_address: &dto::address::Address,
) -> Result<i32> {
    let id = diesel::insert_into(address::table)
        .values((
            address::street.eq(new_address.street()),
            address::city.eq(new_address.city()),
            address::state.eq(new_address.state()),
        ))
        .returning(address::id)
        .get_result(connection)?;

    Ok(id)
}

/// Retrieve a club with its address. A missing club is not an error.
pub fn find_by_id(
    connection: &mut SqliteConnection,
    club_id: i32,
) -> Result<Option<dto::club::Club>> {
    let result = club::table
        .left_join(address::table)
        .filter(club::id.eq(club_id))
        .select((Club::as_select(), Option::<Address>::as_select()))
        .first::<(Club, Option<Address>)>(connection)
        .optional()?;

    result
        .map(|(club, address)| club.into_dto(address))
        .transpose()
}

/// Retrieve all clubs located in `state_code`, ordered by id.
pub fn find_by_state(
    connection: &mut SqliteConnection,
    state_code: &str,
) -> Result<Vec<dto::club::Club>> {
    let results = club::table
        .inner_join(address::table)
        .filter(address::state.eq(state_code))
        .order(club::id.asc())
        .select((Club::as_select(), Address::as_select()))
        .load::<(Club, Address)>(connection)?;

    results
        .into_iter()
        .map(|(club, address)| club.into_dto(Some(address)))
        .collect()
}

/// Retrieve at most `limit` clubs, skipping the first `offset` ones, ordered by id.
pub fn find_slice(
    connection: &mut SqliteConnection,
    offset: i64,
    limit: i64,
) -> Result<Vec<dto::club::Club>> {
    let results = club::table
        .left_join(address::table)
        .order(club::id.asc())
        .limit(limit)
        .offset(offset)
        .select((Club::as_select(), Option::<Address>::as_select()))
        .load::<(Club, Option<Address>)>(connection)?;

    results
        .into_iter()
        .map(|(club, address)| club.into_dto(address))
        .collect()
}

/// Same as [find_slice], only considering clubs of the given category.
pub fn find_slice_by_category(
    connection: &mut SqliteConnection,
    category: ClubCategory,
    offset: i64,
    limit: i64,
) -> Result<Vec<dto::club::Club>> {
    let results = club::table
        .left_join(address::table)
        .filter(club::club_category.eq(category.to_string()))
        .order(club::id.asc())
        .limit(limit)
        .offset(offset)
        .select((Club::as_select(), Option::<Address>::as_select()))
        .load::<(Club, Option<Address>)>(connection)?;

    results
        .into_iter()
        .map(|(club, address)| club.into_dto(address))
        .collect()
}

pub fn count(connection: &mut SqliteConnection) -> Result<i64> {
    let count = club::table.count().get_result(connection)?;

    Ok(count)
}

pub fn count_by_category(connection: &mut SqliteConnection, category: ClubCategory) -> Result<i64> {
    let count = club::table
        .filter(club::club_category.eq(category.to_string()))
        .count()
        .get_result(connection)?;

    Ok(count)
}

/// Retrieve every state at least one club is located in, sorted.
pub fn find_all_states(connection: &mut SqliteConnection) -> Result<Vec<String>> {
    let states = address::table
        .select(address::state)
        .distinct()
        .order(address::state.asc())
        .load(connection)?;

    Ok(states)
}

/// Replace the content of a club. Its address is created, updated or deleted
/// so that it mirrors the one of `new_club`.
/// Return false when no club has this id.
pub fn update(
    connection: &mut SqliteConnection,
    club_id: i32,
    new_club: &NewClub,
) -> Result<bool> {
    connection.transaction::<_, DatabaseError, _>(|connection| {
        let Some(current_address_id) = find_address_id(connection, club_id)? else {
            return Ok(false);
        };

        let new_address_id = match (current_address_id, new_club.address()) {
            (Some(current_address_id), Some(new_address)) => {
                diesel::update(address::table.filter(address::id.eq(current_address_id)))
                    .set((
                        address::street.eq(new_address.street()),
                        address::city.eq(new_address.city()),
                        address::state.eq(new_address.state()),
                    ))
                    .execute(connection)?;
                Some(current_address_id)
            }
            (None, Some(new_address)) => Some(insert_address(connection, new_address)?),
            (_, None) => None,
        };

        diesel::update(club::table.filter(club::id.eq(club_id)))
            .set((
                club::title.eq(new_club.title()),
                club::image.eq(new_club.image()),
                club::description.eq(new_club.description()),
                club::club_category.eq(new_club.club_category().to_string()),
                club::address_id.eq(new_address_id),
            ))
            .execute(connection)?;

        if let (Some(current_address_id), None) = (current_address_id, new_address_id) {
            delete_address(connection, current_address_id)?;
        }

        debug!("Updated club [id: {club_id}]");
        Ok(true)
    })
}

/// Delete a club along with its address.
/// Return false when no club has this id.
pub fn delete(connection: &mut SqliteConnection, club_id: i32) -> Result<bool> {
    connection.transaction::<_, DatabaseError, _>(|connection| {
        let Some(address_id) = find_address_id(connection, club_id)? else {
            return Ok(false);
        };

        diesel::delete(club::table.filter(club::id.eq(club_id))).execute(connection)?;
        if let Some(address_id) = address_id {
            delete_address(connection, address_id)?;
        }

        debug!("Deleted club [id: {club_id}]");
        Ok(true)
    })
}

/// Outer option: whether the club exists. Inner option: whether it has an address.
fn find_address_id(connection: &mut SqliteConnection, club_id: i32) -> Result<Option<Option<i32>>> {
    let address_id = club::table
        .filter(club::id.eq(club_id))
        .select(club::address_id)
        .first::<Option<i32>>(connection)
        .optional()?;

    Ok(address_id)
}

fn delete_address(connection: &mut SqliteConnection, address_id: i32) -> Result<usize> {
    let count =
        diesel::delete(address::table.filter(address::id.eq(address_id))).execute(connection)?;

    Ok(count)
}
