//! The built-in content table: cultures and their stories.
//!
//! Compile-time data rather than a bundled JSON asset, so the catalog can
//! never fail to load. Story IDs are generated per process; everything that
//! survives a restart is keyed by title.

use crate::culture::Culture;
use crate::story::{GradientStop, Story};

/// Build the full ordered culture list.
pub fn all_cultures() -> Vec<Culture> {
    vec![india(), japan(), italy(), nigeria(), mexico(), brazil()]
}

fn india() -> Culture {
    Culture::new(
        "India",
        "A land of vibrant festivals, deep spirituality, and diverse traditions.",
        "South Asia",
    )
    .with_stories([
        Story::new("Celebration", "India")
            .with_paragraphs([
                "The smell hits me first. Marigolds and incense, mixing with the sweet smoke from the kitchen where my grandmother is frying jalebis.",
                "I can hear her humming, the same tune she always hums during Diwali. My cousins are already here, laughing in the courtyard.",
                "They're probably trying to light sparklers even though Baba said to wait until dark.",
                "Maa calls me to help arrange the diyas. We place them carefully along the windowsills, dozens of small clay lamps.",
                "When evening comes, we light the diyas together. The whole neighborhood glows. I can see other families on their balconies.",
                "It is this. Being together. Being home.",
            ])
            .with_images(["sparkles", "figure.2.and.child.holdinghands", "flame.fill"])
            .with_gradient(
                GradientStop::new(0.95, 0.6, 0.35),
                GradientStop::new(0.95, 0.5, 0.65),
            )
            .with_cultural_context(
                "Diwali, the Festival of Lights, celebrates the victory of light over darkness.",
            ),
        Story::new("The Monsoon", "India")
            .with_paragraphs([
                "The first drops arrive in the afternoon, turning the dust into petrichor. That smell—earth meeting water after months of waiting.",
                "My sister and I run to the terrace. Below, children pour into the streets, their mothers calling after them with umbrellas.",
                "No one listens. Everyone just wants to feel the rain on their skin.",
                "Dadi is already in the kitchen, preparing chai and pakoras. This is the ritual. Rain means hot tea and fried snacks.",
                "We sit together by the window, watching sheets of water blur the city. The heat that pressed down on us for so long is finally broken.",
                "This relief, this gratitude—it's in our bones. The monsoon doesn't just water the land. It waters us.",
            ])
            .with_images(["cloud.rain.fill", "drop.fill", "cup.and.saucer.fill"])
            .with_gradient(
                GradientStop::new(0.4, 0.6, 0.8),
                GradientStop::new(0.5, 0.7, 0.9),
            )
            .with_cultural_context(
                "The monsoon season brings relief from summer heat and is celebrated as a time of renewal and abundance.",
            ),
        Story::new("Morning Prayers", "India")
            .with_paragraphs([
                "I wake to the sound of temple bells from across the street. It's still dark, but Amma is already awake.",
                "She's at the small altar in our living room, lighting a diya and placing fresh jasmine flowers near the deities.",
                "I join her on the mat. She doesn't say anything, just hands me the prayer book. We sit in comfortable silence.",
                "Outside, I can hear the milk vendor's bicycle bell and the rhythmic chanting from the temple growing louder.",
                "This quiet hour, before the world rushes in, feels sacred. It's ours.",
                "When we finish, Amma puts a small tilak on my forehead. Now the day can begin.",
            ])
            .with_images(["flame.fill", "bell.fill", "sun.horizon.fill"])
            .with_gradient(
                GradientStop::new(0.9, 0.8, 0.4),
                GradientStop::new(1.0, 0.9, 0.6),
            )
            .with_cultural_context(
                "Daily prayer rituals connect individuals to the divine and provide a peaceful start to the day.",
            ),
    ])
}

fn japan() -> Culture {
    Culture::new(
        "Japan",
        "Where harmony, respect, and ancient customs blend with modern life.",
        "East Asia",
    )
    .with_stories([
        Story::new("The Tea Ceremony", "Japan")
            .with_paragraphs([
                "Sensei kneels with perfect posture, her movements slow and deliberate. Every gesture has meaning.",
                "She purifies each utensil with a silk cloth, the water simmering quietly in the iron kettle.",
                "I watch how she whisks the matcha, the bamboo whisk creating a perfect froth. It takes years to master this simplicity.",
                "When she offers me the bowl, I turn it twice in my palms, as she taught me. A small gesture of respect.",
                "The tea is bitter, grassy, warm. But that's not the point. The point is being here, fully present.",
                "In this small room, with these simple objects, there is only now.",
            ])
            .with_images(["cup.and.saucer.fill", "leaf.fill", "circle.fill"])
            .with_gradient(
                GradientStop::new(0.6, 0.7, 0.95),
                GradientStop::new(0.75, 0.65, 0.9),
            )
            .with_cultural_context(
                "The tea ceremony (chanoyu) embodies principles of harmony, respect, purity, and tranquility.",
            ),
        Story::new("Cherry Blossoms", "Japan")
            .with_paragraphs([
                "The sakura are blooming, and everyone is outside. Under the trees, families spread blue tarps and unpack bentos.",
                "My grandmother sits on a folding chair, her eyes on the petals. She's seen seventy springs, but she still comes every year.",
                "A breeze sends pink snow swirling around us. My niece tries to catch them, laughing.",
                "The blossoms only last a week, maybe two. That's why we come. Because they're fleeting.",
                "Obaasan tells me this is mono no aware—the gentle sadness of things passing.",
                "We eat onigiri and drink sake and watch beauty disappear, grateful we were here to see it.",
            ])
            .with_images(["tree.fill", "wind", "heart.fill"])
            .with_gradient(
                GradientStop::new(1.0, 0.8, 0.9),
                GradientStop::new(1.0, 0.9, 0.95),
            )
            .with_cultural_context(
                "Hanami (flower viewing) celebrates the transient beauty of cherry blossoms and the acceptance of impermanence.",
            ),
        Story::new("The Bathhouse", "Japan")
            .with_paragraphs([
                "I scrub myself clean before entering the bath. This is the rule. You don't bring dirt into the water everyone shares.",
                "The onsen is outdoor, surrounded by rocks and bamboo. Steam rises into the cold mountain air.",
                "I sink in slowly, letting the heat work into my muscles. An old man nods at me from across the pool.",
                "We don't speak. That's not what this is for. We just soak, watching snow fall on the mountains.",
                "My father brought me here when I was young. His father brought him. The water is the same, from deep in the earth.",
                "When I leave, my skin is red and tingling, but inside I feel completely still.",
            ])
            .with_images(["drop.fill", "mountain.2.fill", "figure.seated.relax"])
            .with_gradient(
                GradientStop::new(0.5, 0.7, 0.9),
                GradientStop::new(0.7, 0.8, 0.95),
            )
            .with_cultural_context(
                "Communal bathing in natural hot springs (onsen) is a ritual of purification and relaxation.",
            ),
    ])
}

fn italy() -> Culture {
    Culture::new(
        "Italy",
        "A country of passion, art, delicious food, and strong family bonds.",
        "Europe",
    )
    .with_stories([
        Story::new("Sunday Lunch", "Italy")
            .with_paragraphs([
                "Nonna has been cooking since dawn. The kitchen smells like garlic, tomatoes, and basil—the holy trinity.",
                "Everyone arrives at once. My aunts, uncles, cousins—all talking over each other, kissing cheeks, bringing wine.",
                "The table barely fits in the dining room, but we squeeze in. Primo, secondo, contorno. Course after course.",
                "My grandfather pours wine for everyone, even the teenagers, just a little. He raises his glass. 'Salute!'",
                "We argue about football, politics, who makes the best tiramisu. My cousin's baby falls asleep in someone's arms.",
                "Hours pass. No one is in a hurry. This is what Sunday is for. Being famiglia.",
            ])
            .with_images(["fork.knife", "wineglass.fill", "heart.fill"])
            .with_gradient(
                GradientStop::new(0.8, 0.3, 0.3),
                GradientStop::new(0.9, 0.6, 0.3),
            )
            .with_cultural_context(
                "Sunday family lunch is a sacred tradition, often lasting several hours with multiple courses.",
            ),
        Story::new("Evening Passeggiata", "Italy")
            .with_paragraphs([
                "Around six, the piazza fills with people. This is the passeggiata—the evening walk.",
                "Old men in pressed shirts sit at the café, watching. Young mothers push strollers. Teenagers cluster by the fountain.",
                "I walk arm-in-arm with my best friend, like we've done since we were small. We circle the square slowly.",
                "Everyone sees everyone. Signora Bianchi waves from her balcony. The baker's son flirts with the girls.",
                "We stop for gelato. Lemon for me, pistachio for her. We eat it slowly, gossiping about nothing important.",
                "This ritual—being seen, seeing others, moving together—this is how we stay connected.",
            ])
            .with_images(["figure.walk", "building.2.fill", "heart.2.fill"])
            .with_gradient(
                GradientStop::new(0.9, 0.7, 0.5),
                GradientStop::new(0.95, 0.85, 0.7),
            )
            .with_cultural_context(
                "The passeggiata is an evening social ritual where communities gather to walk, talk, and be seen.",
            ),
        Story::new("The Opera Night", "Italy")
            .with_paragraphs([
                "I'm wearing my grandmother's pearl necklace. The opera house is lit up like a jewel box.",
                "Inside, the red velvet and gold leaf make me feel like I've stepped into another century.",
                "We find our seats in the balcony. Below, the orchestra is tuning. The sound fills every corner.",
                "The lights dim. The first notes rise, and I forget to breathe. This is Verdi—passion made sound.",
                "Around me, people weep openly during the arias. No one is embarrassed. This is what we do.",
                "When it ends, we applaud for ten minutes. Outside, we walk home still humming, still feeling it in our chests.",
            ])
            .with_images(["music.note", "theatermasks.fill", "star.fill"])
            .with_gradient(
                GradientStop::new(0.6, 0.1, 0.2),
                GradientStop::new(0.8, 0.6, 0.2),
            )
            .with_cultural_context(
                "Opera is deeply woven into Italian culture, expressing profound emotion and artistic excellence.",
            ),
    ])
}

fn nigeria() -> Culture {
    Culture::new(
        "Nigeria",
        "A vibrant nation of diverse tribes, rich music, and strong community values.",
        "Africa",
    )
    .with_stories([
        Story::new("Wedding Celebration", "Nigeria")
            .with_paragraphs([
                "The bride emerges in layers of coral and gold aso-oke. The beads on her gele catch the light with every movement.",
                "The drums start—talking drums that sound like a heartbeat, like conversation.",
                "My aunties begin to dance, their shoulders moving in ways that make the young ones laugh and try to copy.",
                "Money sprays through the air as people celebrate the couple. Naira notes flutter like confetti.",
                "The DJ switches to Afrobeats and everyone surges to the dance floor. Young and old, we move as one.",
                "This joy is communal. When one of us marries, we all celebrate. This is Ubuntu. I am because we are.",
            ])
            .with_images(["figure.dance", "music.quarternote.3", "heart.fill"])
            .with_gradient(
                GradientStop::new(0.9, 0.6, 0.2),
                GradientStop::new(0.8, 0.2, 0.4),
            )
            .with_cultural_context(
                "Nigerian weddings are grand celebrations that unite families and communities with music, dance, and traditional attire.",
            ),
        Story::new("Market Day", "Nigeria")
            .with_paragraphs([
                "The market hums with life before the sun is fully up. My mother greets every vendor by name.",
                "We stop at the fabric seller, running our hands over ankara prints—bold geometric patterns in every color imaginable.",
                "The tomato seller calls out prices in Yoruba. A woman bargaining nearby switches between Hausa and English mid-sentence.",
                "Mama buys dried fish, fresh pepper, palm oil. I carry the bags, stopping to taste a piece of chin-chin offered by an auntie.",
                "This chaos is organized. Everyone knows their place, their role. The market is more than commerce.",
                "It's where news is shared, where community happens, where we remember who we are together.",
            ])
            .with_images(["basket.fill", "bag.fill", "person.3.fill"])
            .with_gradient(
                GradientStop::new(0.9, 0.5, 0.2),
                GradientStop::new(0.7, 0.3, 0.5),
            )
            .with_cultural_context(
                "Markets are vibrant social hubs where commerce, culture, and community intersect daily.",
            ),
        Story::new("Moonlight Stories", "Nigeria")
            .with_paragraphs([
                "After dinner, we gather in the compound. The adults bring out chairs, and we children sit on mats.",
                "Papa begins a story about Anansi the spider. His voice rises and falls, and we lean in.",
                "When he asks questions, we call back the answers in chorus. This is call and response, ancient as time.",
                "My grandmother adds her own story, about a tortoise who tried to be clever and learned a hard lesson.",
                "The moon is full overhead. Someone starts clapping a rhythm, and soon we're all joining in.",
                "These stories aren't just entertainment. They teach us who to be, how to live. They connect us to those who came before.",
            ])
            .with_images(["moon.stars.fill", "figure.seated.storytelling", "sparkles"])
            .with_gradient(
                GradientStop::new(0.2, 0.2, 0.4),
                GradientStop::new(0.5, 0.4, 0.6),
            )
            .with_cultural_context(
                "Oral storytelling preserves cultural wisdom, values, and history across generations.",
            ),
    ])
}

fn mexico() -> Culture {
    Culture::new(
        "Mexico",
        "Known for colorful traditions, delicious cuisine, and deep-rooted family values.",
        "North America",
    )
    .with_stories([
        Story::new("Day of the Dead", "Mexico")
            .with_paragraphs([
                "We build the ofrenda together, three tiers draped in papel picado that my sister cut by hand.",
                "I place photos of Abuela at the center. Her favorite foods surround them: tamales, mole, pan dulce.",
                "Marigold petals create a path from the door to the altar. Their scent is everywhere, guiding her home.",
                "Mama lights copal incense. The smoke rises, carrying our prayers. We're not sad. We're welcoming her back.",
                "That night, we go to the cemetery. Families everywhere have transformed graves into gardens of light.",
                "We eat, we laugh, we tell stories about those who've gone. Death is not an ending. They live in our remembering.",
            ])
            .with_images(["photo.fill", "flame.fill", "heart.fill"])
            .with_gradient(
                GradientStop::new(0.9, 0.5, 0.2),
                GradientStop::new(0.8, 0.2, 0.5),
            )
            .with_cultural_context(
                "Día de los Muertos honors deceased loved ones, celebrating their lives with ofrendas, food, and remembrance.",
            ),
        Story::new("Fiesta in the Plaza", "Mexico")
            .with_paragraphs([
                "The plaza is transformed. String lights crisscross overhead, and someone has set up a stage for the mariachi.",
                "My prima pulls me toward the food stalls. Elotes roasting, churros frying, the smell of carnitas.",
                "The music starts—trumpets bright as sunshine, guitars that make your heart ache in the best way.",
                "Couples dance in the square. Little kids run between their legs. Old men argue about fútbol at the tables.",
                "This is our town's saint's day, but it could be any celebration. We don't need much excuse for fiesta.",
                "Someone hands me a cup of champurrado. It's thick, sweet, warm. I drink it and feel home in my bones.",
            ])
            .with_images(["music.note", "figure.dance", "party.popper.fill"])
            .with_gradient(
                GradientStop::new(0.9, 0.3, 0.3),
                GradientStop::new(1.0, 0.8, 0.2),
            )
            .with_cultural_context(
                "Community celebrations bring towns together with music, dance, food, and shared joy.",
            ),
        Story::new("Making Tortillas", "Mexico")
            .with_paragraphs([
                "Abuela's hands move without thinking, pressing masa into perfect circles. I've watched her do this a thousand times.",
                "She lets me try. My tortilla is lumpy, uneven. She doesn't criticize, just shows me again how to pat it flat.",
                "The comal is hot enough that the tortilla puffs up with air, becoming something magical.",
                "We stack them in a cloth to keep warm. The smell fills the kitchen—corn and earth and sustenance.",
                "Later, we'll fill them with beans, with cheese, with whatever we have. But right now, they're perfect as they are.",
                "This is what she's teaching me. Not just cooking. How to feed people, how to show love with your hands.",
            ])
            .with_images(["hands.sparkles.fill", "circle.fill", "flame.fill"])
            .with_gradient(
                GradientStop::new(0.9, 0.8, 0.5),
                GradientStop::new(0.8, 0.6, 0.3),
            )
            .with_cultural_context(
                "Making tortillas by hand is a cherished skill passed through generations, representing care and tradition.",
            ),
    ])
}

fn brazil() -> Culture {
    Culture::new(
        "Brazil",
        "A land of rhythm, rainforests, and a spirit of joy and resilience.",
        "South America",
    )
    .with_stories([
        Story::new("Carnaval", "Brazil")
            .with_paragraphs([
                "The drumbeat is in my chest, in my feet, in the air itself. The blocos fill the street with color and bodies.",
                "I'm wearing feathers and sequins, paint on my face. Everyone is. We're all beautiful, all ridiculous, all free.",
                "The samba school passes by, and the precision of their movement makes me stop breathing. Months of practice in every step.",
                "A stranger hands me a cup of caipirinha. We dance together for one song, then they're gone into the crowd.",
                "This is what people don't understand. Carnaval isn't escape. It's the most real thing we do.",
                "For these days, we remember that joy is resistance, that beauty is survival, that we dance because we must.",
            ])
            .with_images(["figure.dance", "music.quarternote.3", "sparkles"])
            .with_gradient(
                GradientStop::new(0.9, 0.8, 0.1),
                GradientStop::new(0.3, 0.7, 0.3),
            )
            .with_cultural_context(
                "Carnaval is Brazil's most famous celebration, a explosion of music, dance, and cultural expression.",
            ),
        Story::new("Beach Sunday", "Brazil")
            .with_paragraphs([
                "On Sundays, all of Rio goes to the beach. It doesn't matter if you're rich or poor—the sand is for everyone.",
                "I spread my canga on the warm sand. Around me, families set up chairs, coolers, umbrellas.",
                "Vendors walk by calling out: 'Água de coco! Queijo! Biscoito!' Their voices are part of the rhythm of the day.",
                "In the water, kids play futevôlei. The ball arcs perfectly over the net, and everyone on the beach watches the point.",
                "As the sun gets lower, someone brings a guitar. A roda forms—people sitting in a circle, singing MPB.",
                "The ocean, the music, the people. This is democracia. This is Brazil.",
            ])
            .with_images(["beach.umbrella.fill", "water.waves", "figure.volleyball"])
            .with_gradient(
                GradientStop::new(0.3, 0.6, 0.9),
                GradientStop::new(1.0, 0.9, 0.6),
            )
            .with_cultural_context(
                "Beach culture is central to Brazilian life, especially in coastal cities—a place of equality and community.",
            ),
        Story::new("Feijoada Saturday", "Brazil")
            .with_paragraphs([
                "My tia starts cooking feijoada on Friday night. The beans simmer for hours with pork, beef, and love.",
                "By Saturday afternoon, the whole building can smell it. Neighbors start appearing at the door.",
                "We set up tables in the courtyard. Someone brings farofa, someone brings couve, someone brings cachaça.",
                "The pot sits in the center, and we serve ourselves family-style. The beans are dark, rich, perfect.",
                "We eat slowly, talking and laughing. Music plays from someone's phone. Kids run around our feet.",
                "This dish came from enslaved people making something beautiful from scraps. We honor that every time we gather like this.",
            ])
            .with_images(["fork.knife", "flame.fill", "person.3.fill"])
            .with_gradient(
                GradientStop::new(0.3, 0.2, 0.1),
                GradientStop::new(0.6, 0.5, 0.2),
            )
            .with_cultural_context(
                "Feijoada is Brazil's national dish, traditionally enjoyed on Saturdays with family and friends.",
            ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_culture_has_three_stories() {
        for culture in all_cultures() {
            assert_eq!(culture.story_count(), 3, "{}", culture.name);
        }
    }

    #[test]
    fn test_story_country_matches_culture_name() {
        for culture in all_cultures() {
            for story in &culture.stories {
                assert_eq!(story.country, culture.name, "{}", story.title);
            }
        }
    }
}
