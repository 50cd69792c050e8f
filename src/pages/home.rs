//! Home page — the single-page portfolio layout.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::certifications::CertificationsSection;
use crate::components::chatbot::FloatingChatbot;
use crate::components::community::CommunitySection;
use crate::components::contact::ContactSection;
use crate::components::education::EducationSection;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::navigation::Navigation;
use crate::components::prizes::PrizesSection;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;

/// Home page — composes the navigation bar, the content sections in
/// scroll order, and the floating assistant widget.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navigation/>
        <main class="page">
            <HeroSection/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ExperienceSection/>
            <EducationSection/>
            <CertificationsSection/>
            <PrizesSection/>
            <CommunitySection/>
            <ContactSection/>
        </main>
        <Footer/>
        <FloatingChatbot/>
    }
}
