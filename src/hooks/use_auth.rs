use yew::prelude::*;

use crate::models::Session;
use crate::services::ApiClient;
use crate::utils::{clear_session, load_session, save_session, RegistrationForm};

#[derive(Clone, PartialEq, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub show_register: bool,
    /// Registration screen creates the first admin instead of a member
    pub setup_admin: bool,
}

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub register: Callback<RegistrationForm>,
    pub setup_admin: Callback<RegistrationForm>,
    pub show_register: Callback<()>,
    pub show_admin_setup: Callback<()>,
    pub back_to_login: Callback<()>,
}

#[hook]
pub fn use_auth(api_url: String) -> UseAuthHandle {
    let state = use_state(|| AuthState {
        session: load_session(),
        ..Default::default()
    });

    // Check the saved token is still accepted
    {
        let state = state.clone();
        let api_url = api_url.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = (*state).session.clone() {
                log::info!("✅ Saved session found: {}", saved.user.email);
                let client = ApiClient::new(api_url).with_token(Some(saved.token.clone()));
                wasm_bindgen_futures::spawn_local(async move {
                    match client.me().await {
                        Ok(profile) => {
                            log::info!("👤 Session valid for {} ({})", profile.name, profile.effective_role().label());
                        }
                        Err(e) if e.is_unauthorized() => {
                            log::warn!("⚠️ Saved session rejected: {}", e);
                            clear_session();
                            state.set(AuthState {
                                notice: Some("Your session has expired. Please sign in again.".to_string()),
                                ..Default::default()
                            });
                        }
                        Err(e) => {
                            // Offline or server down: keep the session
                            log::error!("❌ Could not verify session: {}", e);
                        }
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let state = state.clone();
        let api_url = api_url.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            let client = ApiClient::new(api_url.clone());
            state.set(AuthState {
                busy: true,
                ..(*state).clone()
            });

            wasm_bindgen_futures::spawn_local(async move {
                match client.login(&email, &password).await {
                    Ok(response) => {
                        let session = Session::from(response);
                        if let Err(e) = save_session(&session) {
                            log::error!("❌ {}", e);
                        }
                        log::info!("✅ Signed in as {} ({})", session.user.name, session.role().label());
                        state.set(AuthState {
                            session: Some(session),
                            ..Default::default()
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        state.set(AuthState {
                            error: Some(e.to_string()),
                            ..Default::default()
                        });
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            clear_session();
            log::info!("👋 Logout");
            state.set(AuthState::default());
        })
    };

    let register = {
        let state = state.clone();
        let api_url = api_url.clone();
        Callback::from(move |form: RegistrationForm| {
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    state.set(AuthState {
                        error: Some(e.to_string()),
                        show_register: true,
                        ..Default::default()
                    });
                    return;
                }
            };

            let state = state.clone();
            let client = ApiClient::new(api_url.clone());
            state.set(AuthState {
                busy: true,
                show_register: true,
                ..Default::default()
            });

            wasm_bindgen_futures::spawn_local(async move {
                match client.register(&request).await {
                    Ok(created) => {
                        log::info!("✅ Registered {}", created.user.name);
                        state.set(AuthState {
                            notice: Some(format!("{} Please sign in.", created.message)),
                            ..Default::default()
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        state.set(AuthState {
                            error: Some(e.to_string()),
                            show_register: true,
                            ..Default::default()
                        });
                    }
                }
            });
        })
    };

    let setup_admin = {
        let state = state.clone();
        Callback::from(move |form: RegistrationForm| {
            let request = match form.validate_admin() {
                Ok(request) => request,
                Err(e) => {
                    state.set(AuthState {
                        error: Some(e.to_string()),
                        setup_admin: true,
                        ..Default::default()
                    });
                    return;
                }
            };

            let state = state.clone();
            let client = ApiClient::new(api_url.clone());
            state.set(AuthState {
                busy: true,
                setup_admin: true,
                ..Default::default()
            });

            wasm_bindgen_futures::spawn_local(async move {
                match client.init_admin(&request).await {
                    Ok(created) => {
                        log::info!("✅ Admin account created: {}", created.user.email);
                        state.set(AuthState {
                            notice: Some(format!("{} Please sign in.", created.message)),
                            ..Default::default()
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Admin setup failed: {}", e);
                        state.set(AuthState {
                            error: Some(e.to_string()),
                            setup_admin: true,
                            ..Default::default()
                        });
                    }
                }
            });
        })
    };

    let show_register = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(AuthState {
                show_register: true,
                ..Default::default()
            });
        })
    };

    let show_admin_setup = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(AuthState {
                setup_admin: true,
                ..Default::default()
            });
        })
    };

    let back_to_login = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(AuthState::default());
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
        register,
        setup_admin,
        show_register,
        show_admin_setup,
        back_to_login,
    }
}
