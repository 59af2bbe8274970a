//! Embedded templates for the generated `.vscode` files.
//!
//! The templates are static data built into the binary, one per output
//! file. Only the `${NAME}` placeholder tokens vary run-to-run; the
//! surrounding schema is fixed. `${workspaceFolder}` and `${env:PATH}`
//! are VS Code's own variables, resolved by the editor, never by vsgen.

/// A named template with embedded placeholders.
///
/// The template's name doubles as its output filename.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub body: &'static str,
}

/// The fixed set of templates, in the order they are written.
pub fn builtin() -> &'static [Template] {
    TEMPLATES
}

const TEMPLATES: &[Template] = &[
    Template {
        name: "c_cpp_properties.json",
        body: C_CPP_PROPERTIES,
    },
    Template {
        name: "launch.json",
        body: LAUNCH,
    },
    Template {
        name: "tasks.json",
        body: TASKS,
    },
    Template {
        name: "extensions.json",
        body: EXTENSIONS,
    },
];

const C_CPP_PROPERTIES: &str = r#"{
    "configurations": [
        {
            "name": "Auto",
            "includePath": [
                "${workspaceFolder}/**"
            ],
            "defines": [
                "${STM32_DEVICE}",
                "USE_HAL_DRIVER"
            ],
            "compilerPath": "${TOOLCHAIN_GCC}",
            "cStandard": "c11",
            "cppStandard": "c++17",
            "intelliSenseMode": "gcc-arm",
            "compileCommands": "${COMPILE_COMMANDS}",
            "configurationProvider": "ms-vscode.cmake-tools"
        }
    ],
    "version": 4
}
"#;

const LAUNCH: &str = r#"{
    "version": "0.2.0",
    "configurations": [
        {
            "name": "Debug (OpenOCD)",
            "type": "cortex-debug",
            "request": "launch",
            "executable": "${workspaceFolder}/${BUILD_DIR}/Debug/${ELF_NAME}.elf",

            "servertype": "openocd",
            "gdbPath": "${GDB_PATH}",

            "configFiles": [
                "interface/stlink.cfg",
                "target/${STM32_TARGET}"
            ],

            "runToEntryPoint": "main",
            "svdFile": "${SVD_FILE}",
            "preLaunchTask": "CMake: Build (Debug)",
            "postDebugTask": "Kill OpenOCD"
        },
        {
            "name": "Attach (OpenOCD)",
            "type": "cortex-debug",
            "request": "attach",
            "executable": "${workspaceFolder}/${BUILD_DIR}/Debug/${ELF_NAME}.elf",

            "servertype": "openocd",
            "gdbPath": "${GDB_PATH}",

            "configFiles": [
                "interface/stlink.cfg",
                "target/${STM32_TARGET}"
            ],

            "svdFile": "${SVD_FILE}",
            "preLaunchTask": "CMake: Build (Debug)",
            "postDebugTask": "Kill OpenOCD"
        }
    ]
}
"#;

const TASKS: &str = r#"{
    "version": "2.0.0",
    "tasks": [
        {
            "label": "CMake: Configure (Debug)",
            "type": "shell",
            "command": "cmake",
            "args": [
                "--preset",
                "Debug"
            ],
            "group": "build",
            "problemMatcher": [],
            "options": {
                "env": {
                    "PATH": "${TOOLCHAIN_BIN_PATH}:${env:PATH}"
                }
            }
        },
        {
            "label": "CMake: Build (Debug)",
            "type": "shell",
            "command": "cmake",
            "args": [
                "--build",
                "${workspaceFolder}/${BUILD_DIR}/Debug",
                "--config",
                "Debug",
                "--target",
                "all",
                "-j",
                "10",
                "--verbose"
            ],
            "group": {
                "kind": "build",
                "isDefault": true
            },
            "problemMatcher": [
                "$gcc"
            ],
            "dependsOn": [
                "CMake: Configure (Debug)"
            ],
            "options": {
                "env": {
                    "PATH": "${TOOLCHAIN_BIN_PATH}:${env:PATH}"
                }
            }
        },
        {
            "label": "CMake: Clean",
            "type": "shell",
            "command": "cmake",
            "args": [
                "--build",
                "${workspaceFolder}/${BUILD_DIR}/Debug",
                "--target",
                "clean"
            ],
            "group": "build",
            "problemMatcher": [],
            "options": {
                "env": {
                    "PATH": "${TOOLCHAIN_BIN_PATH}:${env:PATH}"
                }
            }
        },
        {
            "label": "CMake: Configure (Release)",
            "type": "shell",
            "command": "cmake",
            "args": [
                "--preset",
                "Release"
            ],
            "group": "build",
            "problemMatcher": [],
            "options": {
                "env": {
                    "PATH": "${TOOLCHAIN_BIN_PATH}:${env:PATH}"
                }
            }
        },
        {
            "label": "CMake: Build (Release)",
            "type": "shell",
            "command": "cmake",
            "args": [
                "--build",
                "${workspaceFolder}/${BUILD_DIR}/Release",
                "--config",
                "Release",
                "--target",
                "all",
                "-j",
                "10"
            ],
            "group": "build",
            "problemMatcher": [
                "$gcc"
            ],
            "dependsOn": [
                "CMake: Configure (Release)"
            ],
            "options": {
                "env": {
                    "PATH": "${TOOLCHAIN_BIN_PATH}:${env:PATH}"
                }
            }
        },
        {
            "label": "Flash Firmware (Debug)",
            "type": "shell",
            "command": "${OPENOCD_PATH}",
            "args": [
                "-f",
                "interface/stlink.cfg",
                "-f",
                "target/${STM32_TARGET}",
                "-c",
                "program ${BUILD_DIR}/Debug/${ELF_NAME}.hex reset exit"
            ],
            "group": "build",
            "problemMatcher": [],
            "dependsOn": [
                "CMake: Build (Debug)"
            ],
            "options": {
                "cwd": "${workspaceFolder}"
            }
        },
        {
            "label": "Flash Firmware (Release)",
            "type": "shell",
            "command": "${OPENOCD_PATH}",
            "args": [
                "-f",
                "interface/stlink.cfg",
                "-f",
                "target/${STM32_TARGET}",
                "-c",
                "program ${BUILD_DIR}/Release/${ELF_NAME}.hex reset exit"
            ],
            "group": "build",
            "problemMatcher": [],
            "dependsOn": [
                "CMake: Build (Release)"
            ],
            "options": {
                "cwd": "${workspaceFolder}"
            }
        }
        ,
        {
            "label": "Kill OpenOCD",
            "type": "shell",
            "command": "${KILL_OPENOCD_CMD}",
            "args": [${KILL_OPENOCD_ARGS}],
            "problemMatcher": []
        }
    ]
}
"#;

const EXTENSIONS: &str = r#"{
    "recommendations": [
        "ms-vscode.cpptools",
        "ms-vscode.cmake-tools",
        "marus25.cortex-debug",
        "ms-vscode.hexeditor"
    ],
    "unwantedRecommendations": []
}
"#;
