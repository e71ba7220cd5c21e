#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use foodwagen::app::{shell, App};
    use foodwagen::upstream::{FoodsApi, UpstreamConfig};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use simple_logger::SimpleLogger;

    SimpleLogger::new().init().expect("Failed to init logger");

    let upstream = UpstreamConfig::from_env();
    log::info!("Using foods API at {}", upstream.base_url);
    let api = FoodsApi::new(&upstream).expect("Failed to build foods API client");

    let conf = get_configuration(None).expect("Failed to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route(
            "/api/{*fn_name}",
            axum::routing::any({
                let api = api.clone();
                move |req: axum::extract::Request| {
                    leptos_axum::handle_server_fns_with_context(
                        move || provide_context(api.clone()),
                        req,
                    )
                }
            }),
        )
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let api = api.clone();
                move || provide_context(api.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");
    log::info!("Listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Entry point only matters for the ssr binary; hydration happens through
    // the `hydrate` export in lib.rs.
}
