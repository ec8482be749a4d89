//! Page footer with the authorized-use notice.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__notice">
                "RedRecon is a simulation environment. Only test systems you own or are authorized to assess."
            </p>
        </footer>
    }
}
