use dioxus::prelude::*;

use crate::client::{
    components::{IdentityLayout, Navbar},
    routes::{Formation, Home, Login, MyOfficers, MySkills, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

        #[layout(IdentityLayout)]

        #[route("/my/officers")]
        MyOfficers {},

        #[route("/my/skills")]
        MySkills {},

        // Empty `owner` resolves like `me`
        #[route("/formation?:owner")]
        Formation { owner: String },

        #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
