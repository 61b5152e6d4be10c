//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast_tray::ToastTray;
use crate::notify::{Toast, ToastNotifier};
use crate::pages::{
    asistencias::AsistenciasPage, cursos::CursosPage, dashboard::DashboardPage,
    estudiantes::EstudiantesPage, login::LoginPage, materias::MateriasPage, notas::NotasPage,
    participaciones::ParticipacionesPage, prediccion::PrediccionPage,
    unauthorized::UnauthorizedPage,
};
use crate::routes;
use crate::state::store::SessionStore;
use crate::storage::KeyValueStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Session persistence backend: localStorage in the browser, an in-memory
/// map anywhere else.
fn default_storage() -> Arc<dyn KeyValueStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::storage::BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(crate::storage::MemoryStorage::new())
    }
}

/// Root application component.
///
/// Builds the session store once per process, restores any persisted
/// session, provides the shared contexts, and declares the route tree. The
/// authenticated area sits behind an outer gate; role-specific routes add
/// their own inner gate from the policy table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(Vec::<Toast>::new());
    let session = SessionStore::new(default_storage(), Arc::new(ToastNotifier::new(toasts)));
    session.restore();

    provide_context(toasts);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/academico-client.css"/>
        <Title text="Académico"/>

        <Router>
            <ToastTray/>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <ParentRoute path=StaticSegment("") view=AuthenticatedArea>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route
                        path=StaticSegment("notas")
                        view=|| view! {
                            <ProtectedRoute allowed_roles=routes::DOCENTES>
                                <NotasPage/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("asistencias")
                        view=|| view! {
                            <ProtectedRoute allowed_roles=routes::DOCENTES>
                                <AsistenciasPage/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("participaciones")
                        view=|| view! {
                            <ProtectedRoute allowed_roles=routes::DOCENTES>
                                <ParticipacionesPage/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("prediccion-rendimiento")
                        view=|| view! {
                            <ProtectedRoute allowed_roles=routes::DOCENTES>
                                <PrediccionPage/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("materias")
                        view=|| view! {
                            <ProtectedRoute allowed_roles=routes::DOCENTES>
                                <MateriasPage/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("estudiantes")
                        view=|| view! {
                            <ProtectedRoute allowed_roles=routes::ADMIN>
                                <EstudiantesPage/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=StaticSegment("cursos")
                        view=|| view! {
                            <ProtectedRoute allowed_roles=routes::ADMIN>
                                <CursosPage/>
                            </ProtectedRoute>
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Outer gate: everything nested under it requires a valid session. This
/// gate is evaluated before any inner role gate.
#[component]
fn AuthenticatedArea() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Navbar/>
            <main class="layout__content">
                <Outlet/>
            </main>
        </ProtectedRoute>
    }
}
