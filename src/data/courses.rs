use chrono::NaiveDate;

use crate::models::{Course, CurriculumSection, FaqItem, Lesson};

fn objectives() -> Vec<String> {
    [
        "Understand core concepts and foundational principles",
        "Apply practical techniques through hands-on exercises",
        "Build real-world projects from scratch",
        "Master industry-standard tools and workflows",
        "Develop problem-solving skills for complex scenarios",
        "Prepare for professional certification exams",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn lesson(title: &str, duration: &str, preview: bool) -> Lesson {
    Lesson {
        title: title.to_string(),
        duration: duration.to_string(),
        preview,
    }
}

fn section(title: &str, lessons: Vec<Lesson>) -> CurriculumSection {
    CurriculumSection {
        title: title.to_string(),
        lessons,
    }
}

fn curriculum() -> Vec<CurriculumSection> {
    vec![
        section(
            "Getting Started",
            vec![
                lesson("Course Introduction & Overview", "05:30", true),
                lesson("Setting Up Your Environment", "12:00", true),
                lesson("Understanding Key Terminology", "08:45", false),
            ],
        ),
        section(
            "Core Concepts",
            vec![
                lesson("Fundamental Principles Explained", "15:20", false),
                lesson("Working with Essential Tools", "18:00", false),
                lesson("Practical Application Exercise", "22:10", false),
                lesson("Common Mistakes and How to Avoid Them", "10:30", false),
            ],
        ),
        section(
            "Advanced Techniques",
            vec![
                lesson("Deep Dive into Advanced Features", "20:00", false),
                lesson("Real-World Case Study", "25:15", false),
                lesson("Performance Optimization Tips", "14:40", false),
            ],
        ),
        section(
            "Final Project & Wrap-Up",
            vec![
                lesson("Project Requirements & Planning", "08:00", false),
                lesson("Building the Final Project", "35:00", false),
                lesson("Course Summary & Next Steps", "06:20", true),
            ],
        ),
    ]
}

fn faq() -> Vec<FaqItem> {
    [
        (
            "Do I need prior experience to take this course?",
            "This depends on the course level. Beginner courses require no prior experience, while Intermediate and Advanced courses assume foundational knowledge in the subject area.",
        ),
        (
            "How long do I have access to the course materials?",
            "Once purchased, you have lifetime access to all course materials including future updates and additions.",
        ),
        (
            "Is there a certificate upon completion?",
            "Yes, you will receive a certificate of completion that you can share on your professional profiles.",
        ),
        (
            "Can I get a refund if I'm not satisfied?",
            "We offer a 30-day money-back guarantee. If you're not satisfied with the course, contact us via WhatsApp for a full refund.",
        ),
        (
            "How do I access the course after purchase?",
            "After confirming your payment via WhatsApp, you will receive access credentials to use on the course page.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqItem {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

struct Seed {
    id: u32,
    title: &'static str,
    category: &'static str,
    level: &'static str,
    price: f64,
    students: u64,
    rating: f64,
    date: (i32, u32, u32),
    description: &'static str,
    instructor: &'static str,
    tags: [&'static str; 3],
    drive_url: &'static str,
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: 1,
        title: "Introduction LearnPress - LMS Complete Guide",
        category: "Business",
        level: "Beginner",
        price: 500.00,
        students: 333,
        rating: 4.5,
        date: (2025, 8, 1),
        description: "Learn the fundamentals of LearnPress LMS and how to create engaging online courses.",
        instructor: "John Doe",
        tags: ["lms", "wordpress", "education"],
        drive_url: "",
    },
    Seed {
        id: 2,
        title: "Health Foundations - Complete Wellness Guide",
        category: "Health",
        level: "Beginner",
        price: 49.00,
        students: 510,
        rating: 5.0,
        date: (2025, 7, 15),
        description: "Master the basics of health and wellness with practical tips and strategies.",
        instructor: "Dr. Sarah Wilson",
        tags: ["health", "wellness", "nutrition"],
        drive_url: "",
    },
    Seed {
        id: 3,
        title: "Nutrition Basics - Healthy Living Made Simple",
        category: "Health",
        level: "Intermediate",
        price: 19.99,
        students: 120,
        rating: 3.0,
        date: (2025, 5, 3),
        description: "Understand nutrition principles and create healthy meal plans.",
        instructor: "Maria Garcia",
        tags: ["nutrition", "diet", "health"],
        drive_url: "",
    },
    Seed {
        id: 4,
        title: "Network Mastery - Advanced IT Skills",
        category: "IT",
        level: "Advanced",
        price: 99.00,
        students: 800,
        rating: 4.0,
        date: (2025, 3, 18),
        description: "Master advanced networking concepts and become an IT professional.",
        instructor: "Michael Chen",
        tags: ["networking", "it", "technology"],
        drive_url: "",
    },
    Seed {
        id: 5,
        title: "Digital Marketing Fundamentals",
        category: "Marketing",
        level: "Beginner",
        price: 0.00,
        students: 60,
        rating: 2.0,
        date: (2024, 12, 1),
        description: "Learn the basics of digital marketing and online advertising.",
        instructor: "Alex Johnson",
        tags: ["marketing", "digital", "advertising"],
        drive_url: "https://docs.google.com/document/d/1uq6g64ZqdSfhB5kldtXjT6_vuI30BPYdJK4-ceQqWeA/edit?usp=drive_link",
    },
    Seed {
        id: 6,
        title: "Mobile Photography Masterclass",
        category: "Photography",
        level: "Beginner",
        price: 39.00,
        students: 1200,
        rating: 5.0,
        date: (2025, 8, 5),
        description: "Create stunning photos with just your smartphone.",
        instructor: "Lisa Park",
        tags: ["photography", "mobile", "creativity"],
        drive_url: "",
    },
    Seed {
        id: 7,
        title: "Color Theory for Designers",
        category: "Design",
        level: "Beginner",
        price: 9.00,
        students: 20,
        rating: 1.0,
        date: (2024, 10, 11),
        description: "Understand color principles and create harmonious designs.",
        instructor: "David Kim",
        tags: ["design", "color", "theory"],
        drive_url: "",
    },
    Seed {
        id: 8,
        title: "JavaScript Essentials - Modern Development",
        category: "Developer",
        level: "Intermediate",
        price: 29.00,
        students: 340,
        rating: 4.0,
        date: (2025, 1, 22),
        description: "Master JavaScript fundamentals and modern ES6+ features.",
        instructor: "Emma Watson",
        tags: ["javascript", "programming", "web-development"],
        drive_url: "",
    },
];

pub fn builtin_courses() -> Vec<Course> {
    let objectives = objectives();
    let curriculum = curriculum();
    let faq = faq();

    SEEDS
        .iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.date;
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            let lessons = curriculum.iter().map(|s| s.lessons.len() as u32).sum();
            Some(Course {
                id: seed.id,
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                category: seed.category.to_string(),
                level: seed.level.to_string(),
                instructor: seed.instructor.to_string(),
                image: "example.png".to_string(),
                price: seed.price,
                students: seed.students,
                lessons,
                rating: seed.rating,
                date,
                tags: seed.tags.iter().map(|t| t.to_string()).collect(),
                drive_url: seed.drive_url.to_string(),
                teacher_phone: None,
                learning_objectives: objectives.clone(),
                curriculum: curriculum.clone(),
                faq: faq.clone(),
            })
        })
        .collect()
}
