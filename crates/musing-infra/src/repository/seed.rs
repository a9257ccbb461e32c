//! The posts a fresh site starts with.

use musing_core::domain::Post;

const MINIMALISM: &str = r#"
<p>It all started with a cluttered desk and an even more cluttered mind. I realized that the excess around me was reflecting the chaos within. Minimalism wasn't just about owning fewer things; it was about making room for more life, more peace, and more focus.</p>
<p>The first step was the hardest: letting go. I donated bags of clothes I hadn't worn in years, books I'd never read again, and countless knick-knacks that served no purpose other than collecting dust. Each item removed felt like a weight lifted.</p>
<h2 class="text-xl font-headline mt-4 mb-2">The Digital Declutter</h2>
<p>Physical decluttering was only half the battle. My digital life was equally chaotic. Unending notifications, a desktop littered with files, and an inbox overflowing with unread emails. Applying minimalist principles here meant unsubscribing aggressively, organizing files into a simple system, and turning off most notifications.</p>
<p><img src="https://placehold.co/600x400.png" alt="Clean workspace" class="my-4 rounded-md shadow-md" /></p>
<p>The transformation has been profound. My home is calmer, my mind clearer, and my days more intentional. This journey is ongoing, but the rewards are already immeasurable.</p>
"#;

const MINDFUL_MORNINGS: &str = r#"
<p>How you start your morning can set the tone for your entire day. Instead of rushing through a chaotic routine, imagine beginning with peace, presence, and purpose. That's the power of a mindful morning.</p>
<p>My own mindful morning ritual involves a few key elements:</p>
<ul class="list-disc list-inside my-4 space-y-1">
  <li><strong>Hydration:</strong> A glass of water first thing.</li>
  <li><strong>Meditation:</strong> Just 10 minutes of quiet stillness.</li>
  <li><strong>Movement:</strong> Gentle stretching or a short walk.</li>
  <li><strong>Gratitude:</strong> Noting down three things I'm thankful for.</li>
  <li><strong>No Screens:</strong> Avoiding my phone for the first hour.</li>
</ul>
<p><img src="https://placehold.co/600x400.png" alt="Sunrise meditation" class="my-4 rounded-md shadow-md" /></p>
<p>These simple practices have transformed my days from reactive to proactive, from stressful to serene. It's not about adding more to your to-do list, but about cultivating a state of being that supports you throughout the day.</p>
"#;

const SAYING_NO: &str = r#"
<p>In a world that constantly demands our attention, "yes" can feel like the default answer. But every "yes" to something is a "no" to something else, often our own priorities, well-being, or peace of mind.</p>
<h2 class="text-xl font-headline mt-4 mb-2">Why We Struggle to Say No</h2>
<p>Fear of disappointing others, missing out, or appearing unhelpful often drives us to overcommit. However, learning to say "no" gracefully is a crucial skill for maintaining boundaries and protecting our most valuable resources: time and energy.</p>
<p>Strategies for saying no effectively:</p>
<ol class="list-decimal list-inside my-4 space-y-1">
  <li><strong>Be direct and brief:</strong> A simple "I can't take that on right now" is often enough.</li>
  <li><strong>Offer an alternative (if you want):</strong> "I can't do X, but I could help with Y."</li>
  <li><strong>Don't over-apologize:</strong> You have the right to manage your commitments.</li>
  <li><strong>Buy time:</strong> "Let me check my schedule and get back to you."</li>
</ol>
<p>Mastering the art of saying no is not about being negative; it's about being intentional with your commitments, allowing you to say a more powerful "yes" to the things that truly matter.</p>
"#;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// Three sample posts, in insertion order (not sorted).
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            slug: "journey-into-minimalism".to_string(),
            title: "My Journey into the World of Minimalism".to_string(),
            content: MINIMALISM.to_string(),
            excerpt: "Discover how embracing minimalism can declutter not just your space, but also your mind, leading to a more focused and peaceful life.".to_string(),
            featured_image: "https://placehold.co/800x450.png".to_string(),
            author: "Jane Doe".to_string(),
            date: "2024-07-15T10:00:00Z".to_string(),
            category: "Lifestyle".to_string(),
            tags: tags(&["Minimalism", "Personal Growth", "Simplicity"]),
            read_time: "6 min read".to_string(),
        },
        Post {
            slug: "mindful-mornings".to_string(),
            title: "Crafting Mindful Mornings: A Guide to Starting Your Day with Intention".to_string(),
            content: MINDFUL_MORNINGS.to_string(),
            excerpt: "Learn how to transform your mornings from chaotic to calm with simple, intentional practices that pave the way for a more productive and peaceful day.".to_string(),
            featured_image: "https://placehold.co/800x450.png".to_string(),
            author: "John Smith".to_string(),
            date: "2024-07-22T09:00:00Z".to_string(),
            category: "Well-being".to_string(),
            tags: tags(&["Mindfulness", "Routine", "Productivity", "Self-care"]),
            read_time: "5 min read".to_string(),
        },
        Post {
            slug: "the-art-of-saying-no".to_string(),
            title: "The Subtle Art of Saying No: Reclaiming Your Time and Energy".to_string(),
            content: SAYING_NO.to_string(),
            excerpt: "Explore the importance of setting boundaries and learn practical strategies for saying \"no\" to reclaim your time and energy for what truly matters.".to_string(),
            featured_image: "https://placehold.co/800x450.png".to_string(),
            author: "Alice Brown".to_string(),
            date: "2024-07-29T11:00:00Z".to_string(),
            category: "Productivity".to_string(),
            tags: tags(&["Boundaries", "Time Management", "Self-respect"]),
            read_time: "7 min read".to_string(),
        },
    ]
}
