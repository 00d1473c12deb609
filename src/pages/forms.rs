//! Form previews: the fixed class constants composed into a sign-in form.

use dioxus::prelude::*;
use tailframe_ui::{SubmitButton, TextField, FORM_CLASSES};

use crate::components::{PreviewPage, PreviewSection};

#[component]
pub fn Forms() -> Element {
    rsx! {
        PreviewPage { title: "Forms",
            PreviewSection {
                title: "Sign-in form",
                note: "Composed from the fixed form class constants.",
                div { class: "w-full max-w-sm",
                    form { class: FORM_CLASSES,
                        TextField {
                            label: "Email address",
                            name: "email",
                            input_type: "email",
                            required: true,
                        }
                        TextField {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            required: true,
                        }
                        SubmitButton { "Sign in" }
                    }
                }
            }
            PreviewSection { title: "Field states",
                div { class: "w-full max-w-sm space-y-6",
                    TextField {
                        label: "With value",
                        name: "company",
                        value: "Acme Inc.",
                    }
                    TextField {
                        label: "With placeholder",
                        name: "city",
                        placeholder: "Where are you based?",
                    }
                    TextField {
                        label: "With error",
                        name: "username",
                        value: "tom!",
                        error: "Usernames may only contain letters and digits.",
                    }
                    TextField {
                        label: "Disabled",
                        name: "plan",
                        value: "Enterprise",
                        disabled: true,
                    }
                }
            }
        }
    }
}
