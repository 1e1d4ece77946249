//! Site footer with navigation, contact links, and the content disclaimer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-section">
                    <h3 class="footer-title">"Opennionated"</h3>
                    <p class="footer-description">
                        "A platform for UPenn students to share their thoughts, ideas, and opinions."
                    </p>
                </div>
                <div class="footer-section">
                    <h3 class="footer-title">"Navigate"</h3>
                    <ul class="footer-links">
                        <li><a href="/" class="footer-link">"Home"</a></li>
                        <li><a href="/articles" class="footer-link">"Articles"</a></li>
                        <li><a href="/join" class="footer-link">"Join Us"</a></li>
                    </ul>
                </div>
                <div class="footer-section">
                    <h3 class="footer-title">"Contact"</h3>
                    <ul class="footer-links">
                        <li><a href="mailto:info@opennionated.com" class="footer-link">"Email Us"</a></li>
                        <li><a href="https://twitter.com/opennionated" class="footer-link">"Twitter"</a></li>
                        <li><a href="https://instagram.com/opennionated" class="footer-link">"Instagram"</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p class="footer-copyright">"© Opennionated. All rights reserved."</p>
            </div>
            <div class="footer-disclaimer">
                <h4>"Legal Disclaimer"</h4>
                <p>
                    "The opinions and views expressed on Opennionated are those of the individual authors and do \
                     not necessarily reflect the official policy or position of the University of Pennsylvania \
                     or any affiliated organizations. All content is provided for informational purposes only."
                </p>
                <p>
                    "Opennionated does not endorse or take responsibility for the accuracy, completeness, or \
                     reliability of any content published on this platform. Authors are solely responsible for \
                     their contributions."
                </p>
            </div>
        </footer>
    }
}
