//! Planet detail panel.
//!
//! Left half shows a painted preview of the body, right half the tabbed
//! information. An unknown id renders a "Planet not found" fallback.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::{Planet, PlanetCatalog};
use crate::detail::{
    DetailTab, DetailViewState, detail_rows, format_diameter, format_orbital_period,
    format_temperature,
};
use crate::render::frame::ring_geometry;
use crate::shell::{ShellCommand, ShellState};
use crate::types::Panel;

use super::icons;
use super::theme::{Palette, colors, lerp_color, rgb};

pub fn detail_panel_system(
    mut contexts: EguiContexts,
    shell: Res<ShellState>,
    catalog: Res<PlanetCatalog>,
    mut detail: ResMut<DetailViewState>,
    mut shell_commands: MessageWriter<ShellCommand>,
) {
    if shell.visible_panel() != Panel::Detail {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let palette = Palette::for_theme(shell.night_mode);
    let planet = detail.resolve(&catalog);

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(palette.panel_bg))
        .show(ctx, |ui| {
            let Some(planet) = planet else {
                render_not_found(ui, &palette, &mut shell_commands);
                return;
            };

            ui.columns(2, |columns| {
                let turn = render_preview(
                    &mut columns[0],
                    planet,
                    detail.preview_angle,
                    &palette,
                    &mut shell_commands,
                );
                detail.turn_preview(turn);
                render_info(&mut columns[1], planet, &palette, &mut detail.tab);
            });
        });
}

fn render_not_found(
    ui: &mut egui::Ui,
    palette: &Palette,
    shell_commands: &mut MessageWriter<ShellCommand>,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.label(egui::RichText::new("Planet not found").size(18.0).color(colors::TEXT));
        ui.add_space(12.0);
        let back = egui::Button::new(
            egui::RichText::new("Back to Solar System").color(colors::TEXT),
        )
        .fill(palette.active);
        if ui.add(back).clicked() {
            shell_commands.write(ShellCommand::Navigate(Panel::Scene));
        }
    });
}

/// Draws the spinning globe and returns how far to turn it this frame.
fn render_preview(
    ui: &mut egui::Ui,
    planet: &Planet,
    angle: f32,
    palette: &Palette,
    shell_commands: &mut MessageWriter<ShellCommand>,
) -> f32 {
    let back = egui::Button::new(icons::icon_colored(icons::BACK, 22.0, colors::TEXT))
        .fill(palette.active)
        .corner_radius(18.0)
        .min_size(egui::vec2(40.0, 40.0));
    if ui.add(back).on_hover_text("Back to Solar System (Esc)").clicked() {
        shell_commands.write(ShellCommand::Navigate(Panel::Scene));
    }

    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
    let radius = response.rect.width().min(response.rect.height()) * 0.25;
    let center = response.rect.center();
    paint_planet_disc(&painter, center, radius, planet);
    if !planet.is_sun() {
        let stroke = egui::Stroke::new(1.0, egui::Color32::from_black_alpha(50));
        for k in 0..MERIDIANS {
            let longitude = angle + k as f32 * std::f32::consts::TAU / MERIDIANS as f32;
            if let Some(points) = meridian_points(center, radius, longitude) {
                painter.add(egui::Shape::line(points, stroke));
            }
        }
    }

    planet.rotation_speed + response.drag_delta().x * PREVIEW_DRAG_SPEED
}

const MERIDIANS: usize = 6;
const PREVIEW_DRAG_SPEED: f32 = 0.01;

/// Screen points of the meridian at `longitude` on a globe facing the viewer,
/// or `None` when it is on the far side.
fn meridian_points(center: egui::Pos2, radius: f32, longitude: f32) -> Option<Vec<egui::Pos2>> {
    if longitude.cos() <= 0.0 {
        return None;
    }
    let half_width = radius * longitude.sin();
    Some(
        (0..=16)
            .map(|i| {
                let latitude = std::f32::consts::PI * (i as f32 / 16.0 - 0.5);
                center + egui::vec2(half_width * latitude.cos(), radius * latitude.sin())
            })
            .collect(),
    )
}

/// A shaded disc with its ring, if any.
pub(super) fn paint_planet_disc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    planet: &Planet,
) {
    let color = rgb(planet.rgb());

    if planet.is_sun() {
        painter.circle_filled(center, radius * 1.2, color.gamma_multiply(0.2));
    }
    painter.circle_filled(center, radius, color);
    // Lit from the upper left.
    painter.circle_filled(
        center - egui::vec2(radius * 0.3, radius * 0.3),
        radius * 0.45,
        egui::Color32::from_white_alpha(30),
    );

    if let Some(ring) = ring_geometry(planet) {
        let ring_color = ring.color.map(rgb).unwrap_or(color).gamma_multiply(ring.opacity);
        let mid = (ring.inner + ring.outer) * 0.5 * radius;
        let width = (ring.outer - ring.inner) * radius;
        painter.add(egui::Shape::ellipse_stroke(
            center,
            egui::vec2(mid, mid * 0.3),
            egui::Stroke::new(width * 0.5, ring_color),
        ));
    }
}

fn render_info(ui: &mut egui::Ui, planet: &Planet, palette: &Palette, tab: &mut DetailTab) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(
            egui::RichText::new(&planet.name)
                .size(34.0)
                .strong()
                .color(colors::TEXT),
        );
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            for candidate in DetailTab::ALL {
                let active = *tab == candidate;
                let text = egui::RichText::new(candidate.label()).size(15.0).color(if active {
                    colors::ACCENT
                } else {
                    colors::MUTED
                });
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    *tab = candidate;
                }
            }
        });
        ui.separator();
        ui.add_space(8.0);

        match *tab {
            DetailTab::Overview => render_overview(ui, planet, palette),
            DetailTab::FunFacts => render_fun_facts(ui, planet, palette),
            DetailTab::Composition => render_composition(ui, planet, palette),
        }
    });
}

fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::NONE
        .fill(palette.card_bg.gamma_multiply(0.6))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
}

fn render_overview(ui: &mut egui::Ui, planet: &Planet, palette: &Palette) {
    ui.label(egui::RichText::new(&planet.description).size(16.0).color(colors::TEXT));
    ui.add_space(12.0);

    let stats = [
        (icons::DIAMETER, "Diameter", format_diameter(planet)),
        (
            icons::TEMPERATURE,
            "Average Temperature",
            format_temperature(planet.temperature.avg),
        ),
        (icons::PERIOD, "Orbital Period", format_orbital_period(planet)),
        (icons::MOONS, "Moons", planet.moons.to_string()),
    ];
    egui::Grid::new("detail_stats")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 12.0))
        .show(ui, |ui| {
            for (i, (icon, title, value)) in stats.iter().enumerate() {
                card_frame(palette).show(ui, |ui| {
                    ui.set_min_width(180.0);
                    ui.horizontal(|ui| {
                        ui.label(icons::icon_colored(icon, 24.0, colors::ACCENT));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(*title).size(12.0).color(colors::MUTED));
                            ui.label(
                                egui::RichText::new(value)
                                    .size(16.0)
                                    .strong()
                                    .color(colors::TEXT),
                            );
                        });
                    });
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(16.0);
    ui.label(egui::RichText::new("More Details").size(18.0).strong().color(colors::TEXT));
    ui.add_space(4.0);
    for (label, value) in detail_rows(planet) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("{label}:")).color(colors::MUTED));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(value).color(colors::TEXT));
            });
        });
    }
}

fn render_fun_facts(ui: &mut egui::Ui, planet: &Planet, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.label(icons::icon_colored(icons::INFO, 20.0, colors::ACCENT));
        ui.label(
            egui::RichText::new(format!("Fun Facts about {}", planet.name))
                .size(18.0)
                .strong()
                .color(colors::TEXT),
        );
    });
    ui.add_space(8.0);
    for fact in &planet.fun_facts {
        card_frame(palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(fact).color(colors::TEXT));
        });
        ui.add_space(6.0);
    }
}

fn render_composition(ui: &mut egui::Ui, planet: &Planet, palette: &Palette) {
    let heading = |ui: &mut egui::Ui, text: &str| {
        ui.label(egui::RichText::new(text).size(18.0).strong().color(colors::TEXT));
        ui.add_space(4.0);
    };

    heading(ui, "Planet Type");
    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(&planet.composition.kind).color(colors::TEXT));
    });
    ui.add_space(12.0);

    heading(ui, "Atmosphere");
    egui::Grid::new("atmosphere")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 8.0))
        .show(ui, |ui| {
            for (i, gas) in planet.composition.atmosphere.iter().enumerate() {
                card_frame(palette).show(ui, |ui| {
                    ui.set_min_width(140.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(gas).color(colors::TEXT));
                    });
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(12.0);

    heading(ui, "Temperature Range");
    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Minimum {}",
                    format_temperature(planet.temperature.min)
                ))
                .color(colors::TEXT),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Maximum {}",
                        format_temperature(planet.temperature.max)
                    ))
                    .color(colors::TEXT),
                );
            });
        });
        paint_temperature_bar(ui);
    });
}

/// Cold-to-hot gradient strip.
fn paint_temperature_bar(ui: &mut egui::Ui) {
    const STEPS: usize = 32;
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 14.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let step_width = rect.width() / STEPS as f32;
    for i in 0..STEPS {
        let t = i as f32 / (STEPS - 1) as f32;
        let x = rect.left() + i as f32 * step_width;
        let segment = egui::Rect::from_min_size(
            egui::pos2(x, rect.top()),
            egui::vec2(step_width + 0.5, rect.height()),
        );
        painter.rect_filled(segment, 0.0, lerp_color(colors::TEMP_COLD, colors::TEMP_HOT, t));
    }
}
