use fence_sightline::{
    VisibilityCheck, VisibilityJudgment, check_visibility,
    error::Result,
    line::Line,
    scene::{Fence, Observer, Target},
    types::Point,
};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Fence Sightline Demo");

    let ground_floor = Observer::new(Point::new(0.0, 0.0, 0.0))
        .with_eye_height(1.6)
        .with_name("neighbour ground floor window");
    let upper_floor = Observer::new(Point::new(0.0, 5.0, 3.0))
        .with_eye_height(1.5)
        .with_name("neighbour upper floor window");
    let deck = Target::new(Point::new(10.0, 5.0, 0.2)).with_name("deck");
    let boundary = Line::new(Point::new(5.0, 0.0, 0.0), Point::new(5.0, 10.0, 0.0));
    let fence = |height| Fence::new(boundary, height).with_name("east boundary fence");

    let scenarios = [
        ("ground floor window -> deck, 1.8m fence", ground_floor, fence(1.8)),
        ("upper floor window -> deck, 1.8m fence", upper_floor.clone(), fence(1.8)),
        ("upper floor window -> deck, 2.5m fence", upper_floor, fence(2.5)),
    ];

    for (title, observer, fence) in scenarios {
        let input = VisibilityCheck::new(vec![observer], vec![deck.clone()], fence);
        let judgment = check_visibility(&input)?;
        print_judgment(title, &judgment);
    }
    Ok(())
}

fn print_judgment(title: &str, judgment: &VisibilityJudgment) {
    println!("[{title}]");
    println!("  visible:          {}", if judgment.visible { "yes" } else { "no" });
    if let Some(by) = &judgment.obstructed_by {
        println!("  obstructed by:    {by}");
    }
    for sightline in &judgment.sightlines {
        match sightline.obstruction_point {
            Some(at) => println!(
                "  sightline:        blocked at ({:.2}, {:.2}, {:.2}), {:.2}m from the eye",
                at.x,
                at.y,
                at.z,
                sightline.distance_to_obstruction.unwrap_or_default()
            ),
            None => println!("  sightline:        clear"),
        }
    }
    println!("  current height:   {:.2}m", judgment.current_fence_height);
    println!("  minimum height:   {:.2}m", judgment.minimum_fence_height);
    println!("  margin:           {:+.2}m", judgment.height_margin);
    println!("  adequate:         {}", if judgment.is_adequate { "yes" } else { "no" });
    println!("  recommendation:   {}", judgment.recommendation);
    println!();
}
