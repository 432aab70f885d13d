//! Top navigation bar: title, panel buttons and view toggles.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::shell::{ShellCommand, ShellState};
use crate::types::{Panel, ScaleMode};

use super::icons;
use super::theme::{Palette, colors};

const NAV_HEIGHT: f32 = 56.0;

/// Tooltip for the scale toggle, describing what a click does.
pub fn scale_tooltip(mode: ScaleMode) -> &'static str {
    match mode {
        ScaleMode::Visual => "Switch to Realistic Scale (S)",
        ScaleMode::Realistic => "Switch to Visual Scale (S)",
    }
}

pub fn navbar_system(
    mut contexts: EguiContexts,
    shell: Res<ShellState>,
    mut shell_commands: MessageWriter<ShellCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let palette = Palette::for_theme(shell.night_mode);
    let visible = shell.visible_panel();

    egui::TopBottomPanel::top("navbar")
        .exact_height(NAV_HEIGHT)
        .frame(
            egui::Frame::NONE
                .fill(palette.nav_bg)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(icons::icon_colored(icons::DAY, 22.0, colors::ACCENT));
                ui.label(
                    egui::RichText::new("Solar System Explorer")
                        .strong()
                        .size(20.0)
                        .color(colors::TEXT),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 10.0;

                    let (theme_icon, theme_tip) = if shell.night_mode {
                        (icons::DAY, "Switch to Day Mode (N)")
                    } else {
                        (icons::NIGHT, "Switch to Night Mode (N)")
                    };
                    if toggle_button(ui, theme_icon, false, &palette)
                        .on_hover_text(theme_tip)
                        .clicked()
                    {
                        shell_commands.write(ShellCommand::ToggleTheme);
                    }

                    let realistic = shell.scale_mode == ScaleMode::Realistic;
                    if toggle_button(ui, icons::SCALE, realistic, &palette)
                        .on_hover_text(scale_tooltip(shell.scale_mode))
                        .clicked()
                    {
                        shell_commands.write(ShellCommand::ToggleScale);
                    }

                    let (orbit_icon, orbit_tip) = if shell.show_orbits {
                        (icons::ORBITS_ON, "Hide Orbits (O)")
                    } else {
                        (icons::ORBITS_OFF, "Show Orbits (O)")
                    };
                    if toggle_button(ui, orbit_icon, false, &palette)
                        .on_hover_text(orbit_tip)
                        .clicked()
                    {
                        shell_commands.write(ShellCommand::ToggleOrbits);
                    }

                    ui.separator();

                    // Right-to-left, so Quiz is added first.
                    for (panel, label, key) in [
                        (Panel::Quiz, "Quiz", "2"),
                        (Panel::Scene, "Solar System", "1"),
                    ] {
                        let active = visible == panel;
                        let button = egui::Button::new(
                            egui::RichText::new(label).size(15.0).color(colors::TEXT),
                        )
                        .fill(if active { palette.active } else { palette.nav_bg })
                        .min_size(egui::vec2(0.0, 32.0));
                        if ui.add(button).on_hover_text(format!("Press {key}")).clicked() {
                            shell_commands.write(ShellCommand::Navigate(panel));
                        }
                    }
                });
            });
        });
}

fn toggle_button(
    ui: &mut egui::Ui,
    icon: &str,
    active: bool,
    palette: &Palette,
) -> egui::Response {
    let fill = if active { palette.active } else { palette.nav_bg };
    ui.add(
        egui::Button::new(icons::icon_colored(icon, 20.0, colors::TEXT))
            .fill(fill)
            .min_size(egui::vec2(36.0, 32.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_tooltip_names_target_mode() {
        assert!(scale_tooltip(ScaleMode::Visual).contains("Realistic"));
        assert!(scale_tooltip(ScaleMode::Realistic).contains("Visual"));
    }
}
