use crate::club::controller::{ALL_CATEGORIES, ClubController};
use crate::club::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::web::frontend::club_form::ClubForm;
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};

#[get("/")]
pub async fn home() -> Redirect {
    Redirect::to(uri!("/clubs"))
}

#[get("/clubs?<page>&<page_size>&<category>")]
pub async fn index(
    club_controller: &State<ClubController>,
    page: Option<i64>,
    page_size: Option<i64>,
    category: Option<i32>,
) -> Result<Template, Status> {
    let model = club_controller
        .index(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            category.unwrap_or(ALL_CATEGORIES),
        )
        .await?;

    Ok(Template::render(
        "clubs/index",
        context! {
            title: "Running clubs",
            model
        },
    ))
}

#[get("/clubs/<id>")]
pub async fn detail(club_controller: &State<ClubController>, id: i32) -> Result<Template, Status> {
    let model = club_controller.detail(id).await?;
    let title = model.club().title().clone();

    Ok(Template::render(
        "clubs/detail",
        context! {
            title,
            model
        },
    ))
}

#[get("/clubs/state/<state>")]
pub async fn list_clubs_by_state(
    club_controller: &State<ClubController>,
    state: &str,
) -> Result<Template, Status> {
    let model = club_controller.list_clubs_by_state(state).await?;

    Ok(Template::render(
        "clubs/state",
        context! {
            title: format!("Running clubs in {state}"),
            model
        },
    ))
}

#[get("/clubs/states")]
pub async fn list_states(club_controller: &State<ClubController>) -> Result<Template, Status> {
    let model = club_controller.list_states().await?;

    Ok(Template::render(
        "clubs/states",
        context! {
            title: "Running clubs by state",
            model
        },
    ))
}

#[get("/clubs/create")]
pub async fn create_form(club_controller: &State<ClubController>) -> Template {
    Template::render(
        "clubs/form",
        context! {
            title: "Create a club",
            action: "/clubs/create",
            model: club_controller.create_form()
        },
    )
}

/// Store a new club. A photo is mandatory.
#[post("/clubs/create", data = "<form>")]
pub async fn create(
    club_controller: &State<ClubController>,
    form: Form<ClubForm<'_>>,
) -> Result<Redirect, Status> {
    let (draft, photo) = form.into_inner().into_draft()?;
    let mut photo = photo.ok_or_else(|| {
        debug!("No photo joined to the new club");
        Status::BadRequest
    })?;

    club_controller.create(draft, &mut photo).await?;

    Ok(Redirect::to(uri!("/clubs")))
}

#[get("/clubs/edit/<id>")]
pub async fn edit_form(
    club_controller: &State<ClubController>,
    id: i32,
) -> Result<Template, Status> {
    let model = club_controller.edit_form(id).await?;

    Ok(Template::render(
        "clubs/form",
        context! {
            title: "Edit a club",
            action: format!("/clubs/edit/{id}"),
            model
        },
    ))
}

/// Replace the content of a club. Without a new photo, the current one is kept.
#[post("/clubs/edit/<id>", data = "<form>")]
pub async fn edit(
    club_controller: &State<ClubController>,
    id: i32,
    form: Form<ClubForm<'_>>,
) -> Result<Redirect, Status> {
    let (draft, mut photo) = form.into_inner().into_draft()?;

    club_controller.edit(id, draft, photo.as_mut()).await?;

    Ok(Redirect::to(uri!(detail(id))))
}

#[post("/clubs/delete/<id>")]
pub async fn delete(club_controller: &State<ClubController>, id: i32) -> Result<Redirect, Status> {
    club_controller.delete(id).await?;

    Ok(Redirect::to(uri!("/clubs")))
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            title: "Page not found",
            uri: req.uri()
        },
    )
}

#[catch(500)]
pub async fn internal_error() -> Template {
    Template::render(
        "error/500",
        context! {
            title: "Something went wrong"
        },
    )
}

#[cfg(test)]
mod tests {
    use crate::database::DbPool;
    use crate::web::frontend::club_controller as frontend;
    use crate::web::frontend::server::template_fairing;
    use crate::web::tests::{club_controller, seed};
    use rocket::local::asynchronous::Client;

    async fn build_client(pool: DbPool) -> Client {
        seed(&pool);
        let rocket = rocket::build()
            .manage(club_controller(pool))
            .mount(
                "/",
                routes![
                    frontend::home,
                    frontend::index,
                    frontend::detail,
                    frontend::list_clubs_by_state,
                    frontend::list_states,
                    frontend::create_form,
                    frontend::create,
                    frontend::edit_form,
                    frontend::edit,
                    frontend::delete,
                ],
            )
            .register("/", catchers![frontend::not_found, frontend::internal_error])
            .attach(template_fairing());

        Client::tracked(rocket).await.unwrap()
    }

    const BOUNDARY: &str = "X-CLUB-BOUNDARY";

    /// Multipart body of a club form, with a photo when `photo` isn't empty.
    fn multipart_body(title: &str, category: &str, state: &str, photo: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        let fields = [
            ("title", title),
            ("description", "Weekly runs"),
            ("category", category),
            ("street", "1 Congress Ave"),
            ("city", "Austin"),
            ("state", state),
        ];
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if !photo.is_empty() {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"club.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(photo);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_content_type() -> rocket::http::ContentType {
        rocket::http::ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY))
    }

    mod index {
        use crate::database::with_temp_database;
        use crate::web::frontend::club_controller::tests::build_client;
        use rocket::http::Status;
        use rocket::tokio::runtime::Runtime;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client.get("/clubs?page=2&page_size=2").dispatch().await;
                    assert_eq!(Status::Ok, response.status());

                    let page = response.into_string().await.unwrap();
                    assert!(page.contains("Endurance Running Club"));
                    assert!(!page.contains("Running Club 1"));
                })
            })
        }

        #[test]
        fn home_redirects_to_index() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client.get("/").dispatch().await;

                    assert_eq!(Status::SeeOther, response.status());
                    assert_eq!(Some("/clubs"), response.headers().get_one("Location"));
                })
            })
        }

        #[test]
        fn not_found() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client.get("/clubs?page=0").dispatch().await;
                    assert_eq!(Status::NotFound, response.status());

                    let page = response.into_string().await.unwrap();
                    assert!(page.contains("Page not found"));
                })
            })
        }
    }

    mod detail {
        use crate::database::with_temp_database;
        use crate::web::frontend::club_controller::tests::build_client;
        use rocket::http::Status;
        use rocket::tokio::runtime::Runtime;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client.get("/clubs/1").dispatch().await;
                    assert_eq!(Status::Ok, response.status());

                    let page = response.into_string().await.unwrap();
                    assert!(page.contains("Running Club 1"));
                    assert!(page.contains("Charlotte"));
                    assert!(page.contains("North Carolina"));
                })
            })
        }
    }

    mod list_clubs_by_state {
        use crate::database::with_temp_database;
        use crate::web::frontend::club_controller::tests::build_client;
        use rocket::http::Status;
        use rocket::tokio::runtime::Runtime;

        #[test]
        fn no_club_warning() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client.get("/clubs/state/TEXAS").dispatch().await;
                    assert_eq!(Status::Ok, response.status());

                    let page = response.into_string().await.unwrap();
                    assert!(page.contains("No club found"));
                })
            })
        }

        #[test]
        fn states() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client.get("/clubs/states").dispatch().await;
                    assert_eq!(Status::Ok, response.status());

                    let page = response.into_string().await.unwrap();
                    assert!(page.contains("North Carolina"));
                    assert!(page.contains("/clubs/state/NC"));
                })
            })
        }
    }

    mod create {
        use crate::database::dao::club::find_by_id;
        use crate::database::with_temp_database;
        use crate::photo::tests::STUB_PHOTO_REFERENCE;
        use crate::web::frontend::club_controller::tests::{
            build_client, multipart_body, multipart_content_type,
        };
        use dto::club_category::ClubCategory;
        use rocket::http::Status;
        use rocket::tokio::runtime::Runtime;

        #[test]
        fn form() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client.get("/clubs/create").dispatch().await;
                    assert_eq!(Status::Ok, response.status());

                    let page = response.into_string().await.unwrap();
                    assert!(page.contains("action=\"/clubs/create\""));
                    assert!(page.contains("Road runner"));
                })
            })
        }

        #[test]
        fn success() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool.clone()).await;

                    let response = client
                        .post("/clubs/create")
                        .header(multipart_content_type())
                        .body(multipart_body("Austin Runners", "0", "texas", b"photo"))
                        .dispatch()
                        .await;

                    assert_eq!(Status::SeeOther, response.status());
                });

                let club = find_by_id(&mut pool.get().unwrap(), 5).unwrap().unwrap();
                assert_eq!("Austin Runners", club.title());
                assert_eq!(STUB_PHOTO_REFERENCE, club.image());
                assert_eq!(&ClubCategory::RoadRunner, club.club_category());
                assert_eq!("TX", club.address().as_ref().unwrap().state());
            })
        }

        #[test]
        fn missing_photo() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client
                        .post("/clubs/create")
                        .header(multipart_content_type())
                        .body(multipart_body("Austin Runners", "0", "texas", b""))
                        .dispatch()
                        .await;

                    assert_eq!(Status::BadRequest, response.status());
                })
            })
        }

        #[test]
        fn unknown_state() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client
                        .post("/clubs/create")
                        .header(multipart_content_type())
                        .body(multipart_body("Austin Runners", "0", "Atlantis", b"photo"))
                        .dispatch()
                        .await;

                    assert_eq!(Status::BadRequest, response.status());
                })
            })
        }
    }

    mod edit {
        use crate::database::dao::club::find_by_id;
        use crate::database::with_temp_database;
        use crate::web::frontend::club_controller::tests::{
            build_client, multipart_body, multipart_content_type,
        };
        use dto::club::tests::trail_running_club;
        use rocket::http::Status;
        use rocket::tokio::runtime::Runtime;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool.clone()).await;

                    let response = client
                        .post("/clubs/edit/2")
                        .header(multipart_content_type())
                        .body(multipart_body("Moved to Austin", "2", "TX", b""))
                        .dispatch()
                        .await;

                    assert_eq!(Status::SeeOther, response.status());
                    assert_eq!(Some("/clubs/2"), response.headers().get_one("Location"));
                });

                let club = find_by_id(&mut pool.get().unwrap(), 2).unwrap().unwrap();
                assert_eq!("Moved to Austin", club.title());
                assert_eq!(trail_running_club().image(), club.image());
            })
        }

        #[test]
        fn form() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client.get("/clubs/edit/2").dispatch().await;
                    assert_eq!(Status::Ok, response.status());

                    let page = response.into_string().await.unwrap();
                    assert!(page.contains("action=\"/clubs/edit/2\""));
                    assert!(page.contains("Trail Running Club"));
                })
            })
        }

        #[test]
        fn not_found() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool).await;

                    let response = client
                        .post("/clubs/edit/9999")
                        .header(multipart_content_type())
                        .body(multipart_body("Nowhere", "2", "TX", b""))
                        .dispatch()
                        .await;

                    assert_eq!(Status::NotFound, response.status());
                })
            })
        }
    }

    mod delete {
        use crate::database::dao::club::count;
        use crate::database::with_temp_database;
        use crate::web::frontend::club_controller::tests::build_client;
        use rocket::http::Status;
        use rocket::tokio::runtime::Runtime;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let client = build_client(pool.clone()).await;

                    let response = client.post("/clubs/delete/1").dispatch().await;
                    assert_eq!(Status::SeeOther, response.status());

                    let response = client.post("/clubs/delete/1").dispatch().await;
                    assert_eq!(Status::NotFound, response.status());
                });

                assert_eq!(3, count(&mut pool.get().unwrap()).unwrap());
            })
        }
    }
}
