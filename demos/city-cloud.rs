use word_cloud::strategy::{PaletteStyle, SpiralCandidates};
use word_cloud::{FontRef, HeuristicMetrics, WordCloud, WordWeight};

fn main() {
    let cities = [
        ("Seattle", 10.0),
        ("Boston", 10.0),
        ("Chicago", 8.0),
        ("Denver", 7.0),
        ("Boise", 7.0),
        ("Los Angeles", 7.0),
        ("San Fransisco", 6.0),
        ("Victoria", 6.0),
        ("Portland", 5.0),
        ("London", 5.0),
        ("Dublin", 3.0),
        ("Barcelona", 3.0),
        ("Amsterdam", 3.0),
        ("Budapest", 3.0),
        ("Venice", 3.0),
        ("Florence", 2.0),
        ("Oslo", 2.0),
        ("Paris", 2.0),
        ("Tokyo", 1.0),
        ("New York", 1.0),
        ("Fort", 1.0),
    ];
    let words: Vec<WordWeight> = cities
        .iter()
        .map(|(city, weight)| WordWeight::new(*city, *weight).expect("valid city"))
        .collect();

    // measure with character-count estimates so the demo needs no font files
    let font = FontRef::new("SnellRoundhand-Black").expect("valid font");
    let layout = WordCloud::builder(530.0, 250.0)
        .style(PaletteStyle::festive(font, 2024))
        .placement(SpiralCandidates::seeded(7))
        .build(&words, HeuristicMetrics::default())
        .expect("can build cloud")
        .layout()
        .expect("can lay out cloud");

    println!(
        "{} words on a {}x{} canvas after {} rounds",
        layout.words.len(),
        layout.size.width,
        layout.size.height,
        layout.canvas_history.len()
    );
    for word in &layout.words {
        println!(
            "{:>14} {:>5.1}pt at ({:>6.1}, {:>6.1}) {:?}",
            word.word.word,
            word.word.font_size.0,
            word.center.0 .0,
            word.center.1 .0,
            word.word.colour
        );
    }
}
