//! Static English/French string table for the page chrome.
//!
//! The table is nested `locale → section → key → string | string[]`,
//! immutable at runtime, looked up through `state::locale`.

use std::sync::LazyLock;

use serde_json::{Value, json};

static TABLE: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "en": {
            "nav": {
                "home": "Home",
                "projects": "Projects",
                "skills": "Skills",
                "experience": "Experience",
                "education": "Education",
                "certifications": "Certifications",
                "prizes": "Prizes",
                "community": "Community",
                "contact": "Contact"
            },
            "hero": {
                "greeting": "Hello, I'm",
                "name": "Sarra Bousnina",
                "title": "AI Software Engineer",
                "studentInfo": "Final-year Student at ESPRIT",
                "subtitle": "Building intelligent, user-centric software with AI and creativity. Passionate about full-stack development, generative AI and creating innovative solutions that make a difference.",
                "ctaButton": "View My Work",
                "contactMe": "Contact Me"
            },
            "about": {
                "title": "About Me",
                "subtitle": "I'm Sarra Bousnina, a final-year Software Engineering student at ESPRIT, passionate about artificial intelligence. Self-taught through projects and courses, I focus on creating smart, user-centric applications.",
                "seeking": "Currently seeking internship opportunities in AI and Full-Stack Development"
            },
            "skills": {
                "title": "Technical Skills",
                "subtitle": "A toolkit spanning multiple languages, frameworks, and AI technologies.",
                "categories": {
                    "languages": "Languages",
                    "frameworks": "Frameworks",
                    "databases": "Databases",
                    "generativeAI": "Generative AI",
                    "tools": "Tools"
                },
                "items": {
                    "languages": ["Python", "Java", "JavaScript", "TypeScript", "PHP", "C"],
                    "frameworks": ["Spring Boot", "Angular", "React", "Symfony", ".NET", "FastAPI"],
                    "databases": ["MySQL", "MongoDB", "PostgreSQL"],
                    "generativeAI": ["Agentic AI", "RAG", "LLM", "Prompt Engineering", "Vector Databases"],
                    "tools": ["Git", "Docker", "Power BI", "Linux", "Postman"]
                }
            },
            "projects": {
                "title": "Featured Projects",
                "subtitle": "A showcase of my recent work spanning AI applications, web development, and innovative software solutions.",
                "keyFeatures": "Key Features",
                "inspireAI": {
                    "title": "inspireAI",
                    "subtitle": "AI-Powered Content Studio (Personal Project)",
                    "description": "A platform that helps creators generate, organize, and refine social media content and blog posts using AI and a ReAct-style agent.",
                    "features": [
                        "AI-powered content generation for social media and blog posts",
                        "Conversational ReAct-style agent for natural interaction",
                        "Content history with pin, delete, and revisit functionality"
                    ]
                },
                "correctMeAI": {
                    "title": "CorrectMeAI",
                    "subtitle": "Automated Exam Correction System",
                    "description": "An AI-powered web application for automated exam correction, leveraging OCR, LLMs, and intelligent agents.",
                    "features": [
                        "OCR technology for extracting text from scanned exams",
                        "LLM-powered grading and feedback generation",
                        "ReAct agents for handling complex correction workflows"
                    ]
                },
                "timeForge": {
                    "title": "TimeForge",
                    "subtitle": "AI-Powered Productivity Application",
                    "description": "A modular productivity app featuring screen-time analytics, distraction detection, mood analysis with DeepFace, and NLP-driven personalized advice.",
                    "features": [
                        "Screen-time analytics and usage pattern tracking",
                        "AI-powered distraction detection",
                        "Mood analysis using DeepFace for emotional insights"
                    ]
                }
            },
            "experience": {
                "title": "Professional Experience",
                "subtitle": "My journey through various roles and opportunities in software development and AI engineering.",
                "keyAchievements": "Key Achievements",
                "mahdGroup": {
                    "title": "AI Software Development Intern",
                    "organization": "Mahd.Group",
                    "period": "July 2025 - August 2025",
                    "description": "Developed CorrectMeAI, an AI-powered web application for automated exam correction.",
                    "achievements": [
                        "Built a full-stack AI exam correction platform from scratch",
                        "Integrated OCR to extract answers from scanned exams",
                        "Developed a RAG-powered chatbot with a ReAct agent"
                    ]
                },
                "ctama": {
                    "title": "Software Development Intern",
                    "organization": "CTAMA Insurance",
                    "period": "July 2024 - August 2024",
                    "description": "Developed the MyCTAMA mobile insurance application using .NET MAUI.",
                    "achievements": [
                        "Built a complete mobile app from scratch",
                        "Implemented a GPS-based agency locator",
                        "Integrated real-time quote generation"
                    ]
                }
            },
            "education": {
                "title": "Education",
                "subtitle": "Academic background and continuous learning in computer science and artificial intelligence.",
                "esprit": {
                    "title": "Software Engineering",
                    "organization": "ESPRIT",
                    "period": "2023 - Present"
                },
                "ipein": {
                    "title": "Pre-Engineering Program",
                    "organization": "IPEIN",
                    "period": "2021 - 2023"
                },
                "baccalaureate": {
                    "title": "Mathematics Baccalaureate",
                    "organization": "Pioneer High School of Hammam Lif",
                    "period": "2017 - 2021"
                }
            },
            "certifications": {
                "title": "Certifications",
                "subtitle": "Professional certifications and continuous learning achievements in software development and AI.",
                "issuedBy": "Issued by"
            },
            "prizes": {
                "title": "Achievements & Awards",
                "subtitle": "Recognition for excellence in academics, competitions, and professional contributions.",
                "awardedBy": "Awarded by",
                "insatHackathon": {
                    "title": "1st Prize at INSAT Hackathon",
                    "subtitle": "Hack for Drug Discovery",
                    "description": "Our team won 1st place for 'Your Lab Twin AI', a platform accelerating drug discovery with agentic reasoning."
                },
                "balDesProjets": {
                    "title": "1st Prize, Bal des Projets 2025 (Software Engineering)",
                    "subtitle": "TimeForge - AI-Powered Productivity App",
                    "description": "Built a modular app with a team of five, featuring screen-time analytics, distraction detection, and mood analysis."
                }
            },
            "community": {
                "title": "Community",
                "subtitle": "Contributing to the tech community through mentorship, collaboration, and volunteer work.",
                "deepflowMentor": {
                    "role": "Mentor",
                    "organization": "DeepFlow AI Club",
                    "impact": [
                        "Coached ML/AI projects for club members",
                        "Provided technical guidance through hands-on workshops"
                    ]
                },
                "ieeeMember": {
                    "role": "Member",
                    "organization": "IEEE Student Branch",
                    "impact": [
                        "Participated in the 24-hour coding event Xtreme",
                        "Attended technical workshops"
                    ]
                },
                "hackflowVolunteer": {
                    "role": "Volunteer",
                    "organization": "HackFlow",
                    "impact": [
                        "Planning and logistics support for the hackathon event",
                        "Coordinated with multiple stakeholders"
                    ]
                }
            },
            "contact": {
                "title": "Get In Touch",
                "subtitle": "Let's connect and discuss opportunities for collaboration, mentorship, or just a friendly tech conversation.",
                "letsConnect": "Let's Connect",
                "available": "Available for freelance projects and full-time opportunities"
            },
            "footer": {
                "bio": "AI Software Engineer passionate about building intelligent, user-centric applications.",
                "available": "Available for new opportunities",
                "builtWith": "Built with Leptos and Rust."
            },
            "chatbot": {
                "drag": "Drag me",
                "reset": "Reset",
                "placeholder": "Ask about my projects...",
                "empty": "Ask me about my projects, skills, or experience!",
                "send": "Send",
                "error": "Sorry, I failed to respond.",
                "timeout": "Sorry, that took too long. Please try again."
            }
        },
        "fr": {
            "nav": {
                "home": "Accueil",
                "projects": "Projets",
                "skills": "Compétences",
                "experience": "Expérience",
                "education": "Éducation",
                "certifications": "Certifications",
                "prizes": "Prix",
                "community": "Communauté",
                "contact": "Contact"
            },
            "hero": {
                "greeting": "Bonjour, je suis",
                "name": "Sarra Bousnina",
                "title": "Ingénieure Logiciel IA",
                "studentInfo": "Étudiante de dernière année à ESPRIT",
                "subtitle": "Création de logiciels intelligents et centrés sur l'utilisateur avec l'IA et la créativité. Passionnée par le développement full-stack et l'IA générative.",
                "ctaButton": "Voir Mes Projets",
                "contactMe": "Me Contacter"
            },
            "about": {
                "title": "À Propos de Moi",
                "subtitle": "Je suis Sarra Bousnina, étudiante de dernière année en Ingénierie Logicielle à l'ESPRIT, passionnée par l'intelligence artificielle.",
                "seeking": "À la recherche d'un stage en IA et développement Full-Stack"
            },
            "skills": {
                "title": "Compétences Techniques",
                "subtitle": "Une boîte à outils couvrant plusieurs langages, frameworks et technologies IA.",
                "categories": {
                    "languages": "Langages",
                    "frameworks": "Frameworks",
                    "databases": "Bases de Données",
                    "generativeAI": "IA Générative",
                    "tools": "Outils"
                },
                "items": {
                    "languages": ["Python", "Java", "JavaScript", "TypeScript", "PHP", "C"],
                    "frameworks": ["Spring Boot", "Angular", "React", "Symfony", ".NET", "FastAPI"],
                    "databases": ["MySQL", "MongoDB", "PostgreSQL"],
                    "generativeAI": ["IA Agentique", "RAG", "LLM", "Ingénierie de Prompt", "Bases de Données Vectorielles"],
                    "tools": ["Git", "Docker", "Power BI", "Linux", "Postman"]
                }
            },
            "projects": {
                "title": "Projets Vedettes",
                "subtitle": "Une sélection de mes travaux récents couvrant les applications IA, le développement web et les solutions logicielles innovantes.",
                "keyFeatures": "Fonctionnalités Clés",
                "inspireAI": {
                    "title": "inspireAI",
                    "subtitle": "Studio de Contenu IA (Projet Personnel)",
                    "description": "Une plateforme qui aide les créateurs à générer, organiser et affiner du contenu en utilisant l'IA et un agent de style ReAct.",
                    "features": [
                        "Génération de contenu alimentée par l'IA",
                        "Agent conversationnel de style ReAct",
                        "Historique de contenu avec épinglage et révision"
                    ]
                },
                "correctMeAI": {
                    "title": "CorrectMeAI",
                    "subtitle": "Système de Correction d'Examens Automatisé",
                    "description": "Une application web alimentée par l'IA pour la correction automatisée d'examens, exploitant l'OCR, les LLM et des agents intelligents.",
                    "features": [
                        "Technologie OCR pour extraire le texte des examens numérisés",
                        "Notation alimentée par LLM et génération de feedback",
                        "Agents ReAct pour les flux de correction complexes"
                    ]
                },
                "timeForge": {
                    "title": "TimeForge",
                    "subtitle": "Application de Productivité Alimentée par l'IA",
                    "description": "Une application de productivité modulaire avec analyse du temps d'écran, détection des distractions et analyse de l'humeur avec DeepFace.",
                    "features": [
                        "Analyses du temps d'écran",
                        "Détection des distractions alimentée par l'IA",
                        "Analyse de l'humeur avec DeepFace"
                    ]
                }
            },
            "experience": {
                "title": "Expérience Professionnelle",
                "subtitle": "Mon parcours à travers différents rôles et opportunités en développement logiciel et ingénierie IA.",
                "keyAchievements": "Réalisations Clés",
                "mahdGroup": {
                    "title": "Stagiaire en Développement Logiciel IA",
                    "organization": "Mahd.Group",
                    "period": "Juillet 2025 - Août 2025",
                    "description": "Développement de CorrectMeAI, une application web alimentée par l'IA pour la correction automatisée d'examens.",
                    "achievements": [
                        "Création d'une plateforme IA complète de correction d'examens",
                        "Intégration de l'OCR pour extraire les réponses des examens",
                        "Développement d'un chatbot alimenté par RAG avec agent ReAct"
                    ]
                },
                "ctama": {
                    "title": "Stagiaire en Développement Logiciel",
                    "organization": "CTAMA Assurance",
                    "period": "Juillet 2024 - Août 2024",
                    "description": "Développement de l'application mobile d'assurance MyCTAMA avec .NET MAUI.",
                    "achievements": [
                        "Création d'une application mobile complète à partir de zéro",
                        "Implémentation d'un localisateur d'agences basé sur GPS",
                        "Intégration de la génération de devis en temps réel"
                    ]
                }
            },
            "education": {
                "title": "Éducation",
                "subtitle": "Parcours académique et apprentissage continu en informatique et intelligence artificielle.",
                "esprit": {
                    "title": "Ingénierie Logicielle",
                    "organization": "ESPRIT",
                    "period": "2023 - Présent"
                },
                "ipein": {
                    "title": "Programme Préparatoire en Ingénierie",
                    "organization": "IPEIN",
                    "period": "2021 - 2023"
                },
                "baccalaureate": {
                    "title": "Baccalauréat Mathématiques",
                    "organization": "Lycée Pilote de Hammam Lif",
                    "period": "2017 - 2021"
                }
            },
            "certifications": {
                "title": "Certifications",
                "subtitle": "Certifications professionnelles et réalisations d'apprentissage continu en développement logiciel et IA.",
                "issuedBy": "Délivré par"
            },
            "prizes": {
                "title": "Réalisations & Prix",
                "subtitle": "Reconnaissance pour l'excellence académique, les compétitions et les contributions professionnelles.",
                "awardedBy": "Délivré par",
                "insatHackathon": {
                    "title": "1er Prix au Hackathon INSAT",
                    "subtitle": "Hack for Drug Discovery",
                    "description": "Notre équipe a obtenu la 1ère place pour 'Your Lab Twin AI', une plateforme accélérant la découverte de médicaments."
                },
                "balDesProjets": {
                    "title": "1er Prix, Bal des Projets 2025 (Ingénierie Logicielle)",
                    "subtitle": "TimeForge - Application de Productivité IA",
                    "description": "Application modulaire construite en équipe de cinq, avec analyse du temps d'écran et détection des distractions."
                }
            },
            "community": {
                "title": "Implication Communautaire",
                "subtitle": "Contribuer à la communauté technologique grâce au mentorat, à la collaboration et au bénévolat.",
                "deepflowMentor": {
                    "role": "Mentor",
                    "organization": "Club DeepFlow IA",
                    "impact": [
                        "Encadrement de projets ML/IA pour les membres du club",
                        "Orientation technique à travers des ateliers pratiques"
                    ]
                },
                "ieeeMember": {
                    "role": "Membre",
                    "organization": "IEEE Student Branch",
                    "impact": [
                        "Participation à l'événement de codage de 24 heures Xtreme",
                        "Participation à des ateliers techniques"
                    ]
                },
                "hackflowVolunteer": {
                    "role": "Bénévole",
                    "organization": "HackFlow",
                    "impact": [
                        "Support planification et logistique pour l'événement hackathon",
                        "Coordination avec plusieurs parties prenantes"
                    ]
                }
            },
            "contact": {
                "title": "Contactez-Moi",
                "subtitle": "Connectons-nous et discutons d'opportunités de collaboration, de mentorat ou simplement d'une conversation technique amicale.",
                "letsConnect": "Connectons-nous",
                "available": "Disponible pour projets freelance et opportunités à temps plein"
            },
            "footer": {
                "bio": "Ingénieure Logiciel IA passionnée par la création d'applications intelligentes et centrées sur l'utilisateur.",
                "available": "Disponible pour de nouvelles opportunités",
                "builtWith": "Construit avec Leptos et Rust."
            },
            "chatbot": {
                "drag": "Déplacez-moi",
                "reset": "Réinitialiser",
                "placeholder": "Posez une question sur mes projets...",
                "empty": "Posez-moi une question sur mes projets, compétences ou expérience !",
                "send": "Envoyer",
                "error": "Désolée, je n'ai pas pu répondre.",
                "timeout": "Désolée, cela a pris trop de temps. Veuillez réessayer."
            }
        }
    })
});

/// The immutable nested translation table (`locale → section → key`).
pub fn table() -> &'static Value {
    &TABLE
}
